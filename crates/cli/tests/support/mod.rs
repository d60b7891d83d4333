pub mod discovery;
#[allow(dead_code)]
pub mod e2e;

#[allow(dead_code)]
pub fn get_gradlify_binary() -> std::path::PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.join("gradlify")
}
