use gradlify_core::{MigrationMode, RealFileSystem};
use gradlify_pipeline::{
    render_dry_run, write_plan, MigrationContext, MigrationOrchestrator, WriteOutcome,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const ROOT_POM: &str = r#"<project xmlns="http://maven.apache.org/POM/4.0.0">
    <parent>
        <groupId>org.springframework.boot</groupId>
        <artifactId>spring-boot-starter-parent</artifactId>
        <version>3.4.1</version>
    </parent>
    <groupId>com.example</groupId>
    <artifactId>shop</artifactId>
    <version>1.0.0</version>
    <packaging>pom</packaging>
    <properties>
        <java.version>21</java.version>
    </properties>
    <modules>
        <module>api</module>
        <module>missing</module>
    </modules>
</project>"#;

const API_POM: &str = r#"<project xmlns="http://maven.apache.org/POM/4.0.0">
    <parent>
        <groupId>com.example</groupId>
        <artifactId>shop</artifactId>
        <version>1.0.0</version>
    </parent>
    <artifactId>shop-api</artifactId>
    <dependencies>
        <dependency>
            <groupId>org.springframework.boot</groupId>
            <artifactId>spring-boot-starter-web</artifactId>
        </dependency>
    </dependencies>
</project>"#;

fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("pom.xml"), ROOT_POM).unwrap();
    fs::create_dir(temp.path().join("api")).unwrap();
    fs::write(temp.path().join("api/pom.xml"), API_POM).unwrap();
    temp
}

fn run(root: &Path, mode: MigrationMode) -> gradlify_pipeline::MigrationPlan {
    let fs = RealFileSystem;
    let mut context = MigrationContext::new(&fs, root, mode);
    MigrationOrchestrator::new().execute(&mut context).unwrap()
}

#[test]
fn test_migrate_writes_gradle_build() {
    let temp = project();
    let plan = run(temp.path(), MigrationMode::Migrate);

    assert_eq!(
        plan.diagnostics,
        vec!["Module 'missing' has no pom.xml, skipping".to_string()]
    );

    let written = write_plan(&RealFileSystem, &plan, temp.path()).unwrap();
    assert_eq!(written.len(), 5);

    let catalog = fs::read_to_string(temp.path().join("gradle/libs.versions.toml")).unwrap();
    assert!(catalog.contains("spring-boot = \"3.4.1\""));
    assert!(catalog.contains("java = \"21\""));

    let api_build = fs::read_to_string(temp.path().join("api/build.gradle.kts")).unwrap();
    assert!(api_build.contains("implementation(libs.spring.boot.starter.web)"));

    let settings = fs::read_to_string(temp.path().join("settings.gradle.kts")).unwrap();
    assert!(settings.contains("include(\"api\")"));
    assert!(!settings.contains("missing"));

    assert!(temp.path().join("pom.xml").exists());
    assert!(!temp.path().join(".gitignore").exists());
}

#[test]
fn test_overlay_appends_to_existing_gitignore() {
    let temp = project();
    fs::write(temp.path().join(".gitignore"), "target/\n").unwrap();

    let plan = run(temp.path(), MigrationMode::Overlay);
    let written = write_plan(&RealFileSystem, &plan, temp.path()).unwrap();
    assert_eq!(written.last().unwrap().outcome, WriteOutcome::Appended);

    let again = write_plan(&RealFileSystem, &plan, temp.path()).unwrap();
    assert_eq!(again.last().unwrap().outcome, WriteOutcome::Skipped);

    let gitignore = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
    assert!(gitignore.starts_with("target/\n\n# Gradle\n"));
    assert_eq!(gitignore.matches(".gradle/").count(), 1);
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp = project();
    let plan = run(temp.path(), MigrationMode::Migrate);

    let rendered = render_dry_run(&plan);

    assert!(rendered.contains("api/build.gradle.kts"));
    assert!(!temp.path().join("build.gradle.kts").exists());
}

#[test]
fn test_output_directory_separate_from_project() {
    let temp = project();
    let out = TempDir::new().unwrap();
    let plan = run(temp.path(), MigrationMode::Migrate);

    write_plan(&RealFileSystem, &plan, out.path()).unwrap();

    assert!(out.path().join("api/build.gradle.kts").exists());
    assert!(!temp.path().join("settings.gradle.kts").exists());
}
