/// Present in any `.gitignore` that already covers Gradle output.
pub const GITIGNORE_MARKER: &str = ".gradle/";

pub fn gitignore_entries() -> &'static str {
    "# Gradle\n\
     .gradle/\n\
     build/\n\
     !gradle/wrapper/gradle-wrapper.jar\n\
     !**/src/main/**/build/\n\
     !**/src/test/**/build/\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_cover_gradle_output() {
        let entries = gitignore_entries();
        assert!(entries.starts_with("# Gradle\n"));
        assert!(entries.contains(GITIGNORE_MARKER));
        assert!(entries.lines().any(|l| l == "build/"));
        assert!(entries.lines().any(|l| l == "!gradle/wrapper/gradle-wrapper.jar"));
    }
}
