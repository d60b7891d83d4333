//! `build.gradle.kts` generation
//!
//! One file per module. The root of a multi-module build with `pom`
//! packaging only declares plugins (`apply false`) and shared settings; every
//! other module gets a full setup of plugins, toolchain and dependencies.

use crate::context::BuildContext;
use gradlify_maven::{is_bom_import, Dependency, Module, Profile, Properties, Scope};
use gradlify_stack::{
    detect_java_version, detect_kotlin_version, gradle_plugin_id, is_annotation_processor,
    is_devtools, is_skipped_plugin, is_spring_boot_project, map_scope_to_configuration,
    to_accessor, to_library_alias, to_plugin_alias,
};

const HANDLED_PLUGINS: &[&str] = &["spring-boot-maven-plugin", "kotlin-maven-plugin"];

const SPRING_BOOT_ALIASES: &[&str] = &["spring.boot", "spring.dependency.management"];
const KOTLIN_ALIASES: &[&str] = &["kotlin.jvm", "kotlin.spring"];

/// Renders the build file for `module`.
pub fn generate_build_file(module: &Module, ctx: &BuildContext<'_>, is_root: bool) -> String {
    let root = ctx.root;
    let mut properties: Properties = root.properties.clone();
    properties.extend_from(&module.properties);

    let spring_boot = is_spring_boot_project(root);
    let kotlin = detect_kotlin_version(&properties, root.all_plugins()).is_some();
    let java_version = detect_java_version(&properties, root.all_plugins());
    let aggregator = ctx.is_aggregator(module);
    let aggregator_root = is_root && aggregator;

    let mut lines: Vec<String> = Vec::new();

    lines.push("plugins {".to_string());
    if aggregator_root {
        if spring_boot {
            push_plugin_aliases(&mut lines, SPRING_BOOT_ALIASES, " apply false");
        }
        if kotlin {
            push_plugin_aliases(&mut lines, KOTLIN_ALIASES, " apply false");
        }
    } else {
        if kotlin {
            push_plugin_aliases(&mut lines, KOTLIN_ALIASES, "");
        } else {
            lines.push("    java".to_string());
        }
        if spring_boot {
            push_plugin_aliases(&mut lines, SPRING_BOOT_ALIASES, "");
        }
    }
    for plugin in &module.plugins {
        if is_skipped_plugin(&plugin.artifact_id)
            || HANDLED_PLUGINS.contains(&plugin.artifact_id.as_str())
            || gradle_plugin_id(&plugin.artifact_id).is_none()
        {
            continue;
        }
        let alias = to_plugin_alias(&plugin.group_id, &plugin.artifact_id);
        lines.push(format!("    alias(libs.plugins.{})", to_accessor(&alias)));
    }
    lines.push("}".to_string());
    lines.push(String::new());

    if is_root || !ctx.is_multi_module() {
        lines.push(format!("group = \"{}\"", module.group_id));
        if let Some(version) = &module.version {
            lines.push(format!("version = \"{}\"", version));
        }
        lines.push(String::new());
    }

    if !aggregator {
        if let Some(java) = &java_version {
            lines.extend([
                "java {".to_string(),
                "    toolchain {".to_string(),
                format!("        languageVersion = JavaLanguageVersion.of({})", java),
                "    }".to_string(),
                "}".to_string(),
                String::new(),
            ]);
        }
        if kotlin {
            push_block(
                &mut lines,
                &[
                    "kotlin {",
                    "    compilerOptions {",
                    "        freeCompilerArgs.addAll(\"-Xjsr305=strict\")",
                    "    }",
                    "}",
                ],
            );
        }
    }

    let needs_processor_classpath = module
        .dependencies
        .iter()
        .any(|d| d.scope == Scope::Provided || is_annotation_processor(d));
    if kotlin && needs_processor_classpath {
        push_block(
            &mut lines,
            &[
                "configurations {",
                "    compileOnly {",
                "        extendsFrom(configurations.annotationProcessor.get())",
                "    }",
                "}",
            ],
        );
    }

    if is_root {
        push_block(&mut lines, &["repositories {", "    mavenCentral()", "}"]);
    }

    if !module.dependencies.is_empty() && !aggregator_root {
        lines.push("dependencies {".to_string());
        for bom in module.dependency_management.iter().filter(|d| is_bom_import(d)) {
            push_dependency(&mut lines, ctx, bom, |lib| {
                vec![format!("implementation(platform({}))", lib)]
            });
        }
        for dep in &module.dependencies {
            dependency_lines(&mut lines, ctx, dep);
        }
        lines.push("}".to_string());
        lines.push(String::new());
    }

    if aggregator_root {
        lines.push("allprojects {".to_string());
        lines.push(format!("    group = \"{}\"", module.group_id));
        if let Some(version) = &module.version {
            lines.push(format!("    version = \"{}\"", version));
        }
        lines.push("}".to_string());
        lines.push(String::new());
        push_block(
            &mut lines,
            &[
                "subprojects {",
                "    repositories {",
                "        mavenCentral()",
                "    }",
                "}",
            ],
        );
    }

    let has_tests = module.dependencies.iter().any(|d| d.scope == Scope::Test);
    if has_tests && !aggregator {
        push_block(
            &mut lines,
            &["tasks.withType<Test> {", "    useJUnitPlatform()", "}"],
        );
    }

    if !module.profiles.is_empty() {
        lines.push(
            "// ── Maven profile equivalents ─────────────────────────────────".to_string(),
        );
        for profile in &module.profiles {
            profile_hints(&mut lines, profile);
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

fn push_plugin_aliases(lines: &mut Vec<String>, accessors: &[&str], suffix: &str) {
    for accessor in accessors {
        lines.push(format!("    alias(libs.plugins.{}){}", accessor, suffix));
    }
}

fn push_block(lines: &mut Vec<String>, block: &[&str]) {
    lines.extend(block.iter().map(|l| l.to_string()));
    lines.push(String::new());
}

fn dependency_lines(lines: &mut Vec<String>, ctx: &BuildContext<'_>, dep: &Dependency) {
    let configuration = map_scope_to_configuration(&dep.scope);

    if let Some(path) = ctx.project_path(dep) {
        lines.push(format!("    {}(project(\"{}\"))", configuration, path));
        return;
    }

    if is_devtools(dep) {
        push_dependency(lines, ctx, dep, |lib| {
            vec![format!("developmentOnly({})", lib)]
        });
    } else if is_annotation_processor(dep) {
        push_dependency(lines, ctx, dep, |lib| {
            if dep.scope == Scope::Test {
                vec![
                    format!("testCompileOnly({})", lib),
                    format!("testAnnotationProcessor({})", lib),
                ]
            } else if dep.scope == Scope::Provided || dep.optional {
                vec![
                    format!("compileOnly({})", lib),
                    format!("annotationProcessor({})", lib),
                ]
            } else {
                vec![format!("annotationProcessor({})", lib)]
            }
        });
    } else if !dep.exclusions.is_empty() {
        push_dependency(lines, ctx, dep, |lib| {
            let mut block = vec![format!("{}({}) {{", configuration, lib)];
            block.extend(dep.exclusions.iter().map(|e| {
                format!(
                    "    exclude(group = \"{}\", module = \"{}\")",
                    e.group_id, e.artifact_id
                )
            }));
            block.push("}".to_string());
            block
        });
    } else {
        let configuration = if dep.optional && configuration == "implementation" {
            "compileOnly"
        } else {
            configuration
        };
        push_dependency(lines, ctx, dep, |lib| {
            vec![format!("{}({})", configuration, lib)]
        });
    }
}

/// Emits the lines `render` builds for the catalog accessor of `dep`.
/// Dependencies whose catalog entry is commented out are emitted commented
/// too, so the build file never references a missing alias.
fn push_dependency(
    lines: &mut Vec<String>,
    ctx: &BuildContext<'_>,
    dep: &Dependency,
    render: impl FnOnce(&str) -> Vec<String>,
) {
    let alias = ctx
        .catalog
        .library_alias(&dep.group_id, &dep.artifact_id)
        .map(str::to_string)
        .unwrap_or_else(|| to_library_alias(&dep.group_id, &dep.artifact_id));
    let accessor = format!("libs.{}", to_accessor(&alias));
    let rendered = render(&accessor);

    if ctx.library(dep).is_some_and(|entry| entry.is_commented()) {
        lines.push(format!(
            "    // TODO: resolve the version of {}:{} in gradle/libs.versions.toml",
            dep.group_id, dep.artifact_id
        ));
        lines.extend(rendered.into_iter().map(|l| format!("    // {}", l)));
    } else {
        lines.extend(rendered.into_iter().map(|l| format!("    {}", l)));
    }
}

fn profile_hints(lines: &mut Vec<String>, profile: &Profile) {
    let activation = &profile.activation;
    lines.push(format!("// Profile '{}':", profile.id));
    if activation.active_by_default == Some(true) {
        lines.push(
            "//   → Active by default: apply unconditionally or use a Gradle property".to_string(),
        );
    }
    if let Some(property) = &activation.property {
        let name = property.name.as_deref().unwrap_or("?");
        lines.push(format!(
            "//   → Activated by property: -P{}={}",
            name,
            property.value.as_deref().unwrap_or_default()
        ));
        lines.push(format!(
            "//   → Gradle equivalent: if (project.hasProperty(\"{}\")) {{ ... }}",
            property.name.as_deref().unwrap_or_default()
        ));
    }
    if let Some(jdk) = &activation.jdk {
        lines.push(format!("//   → JDK activation: {}", jdk));
    }
    if !profile.dependencies.is_empty() {
        lines.push(format!(
            "//   → Has {} dependencies",
            profile.dependencies.len()
        ));
    }
    if !profile.plugins.is_empty() {
        lines.push(format!("//   → Has {} plugins", profile.plugins.len()));
    }
}
