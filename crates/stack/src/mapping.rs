//! Maven to Gradle translation tables and catalog alias generation
//!
//! Pure string transformations. No I/O.

use gradlify_maven::Scope;
use regex::Regex;
use std::sync::OnceLock;

/// Group prefix to catalog short name. First `starts_with` match wins, so
/// more specific prefixes come before their parents.
const GROUP_PREFIXES: &[(&str, &str)] = &[
    ("org.springframework.boot", "spring-boot"),
    ("org.springframework.cloud", "spring-cloud"),
    ("org.springframework.data", "spring-data"),
    ("org.springframework.security", "spring-security"),
    ("org.springframework.kafka", "spring-kafka"),
    ("org.springframework", "spring"),
    ("io.awspring.cloud", "spring-cloud-aws"),
    ("org.apache.commons", "commons"),
    ("org.apache.kafka", "kafka"),
    ("org.apache.solr", "solr"),
    ("org.apache.lucene", "lucene"),
    ("org.apache.httpcomponents", "httpcomponents"),
    ("org.apache.logging.log4j", "log4j"),
    ("com.fasterxml.jackson.core", "jackson"),
    ("com.fasterxml.jackson.module", "jackson-module"),
    ("com.fasterxml.jackson.datatype", "jackson-datatype"),
    ("com.fasterxml.jackson.dataformat", "jackson-dataformat"),
    ("io.projectreactor", "reactor"),
    ("io.micrometer", "micrometer"),
    ("io.quarkus.platform", "quarkus-platform"),
    ("io.quarkus", "quarkus"),
    ("io.micronaut.data", "micronaut-data"),
    ("io.micronaut.sql", "micronaut-sql"),
    ("io.micronaut.serde", "micronaut-serde"),
    ("io.micronaut.testresources", "micronaut-testresources"),
    ("io.micronaut.test", "micronaut-test"),
    ("io.micronaut.flyway", "micronaut-flyway"),
    ("io.micronaut.validation", "micronaut-validation"),
    ("io.micronaut", "micronaut"),
    ("io.grpc", "grpc"),
    ("io.netty", "netty"),
    ("io.github.resilience4j", "resilience4j"),
    ("org.junit.jupiter", "junit-jupiter"),
    ("org.mockito", "mockito"),
    ("org.assertj", "assertj"),
    ("org.testcontainers", "testcontainers"),
    ("org.mock-server", "mockserver"),
    ("org.wiremock", "wiremock"),
    ("com.github.tomakehurst", "wiremock"),
    ("org.awaitility", "awaitility"),
    ("ch.qos.logback", "logback"),
    ("org.slf4j", "slf4j"),
    ("org.hibernate.orm", "hibernate"),
    ("org.hibernate.validator", "hibernate-validator"),
    ("org.mongodb", "mongodb"),
    ("org.postgresql", "postgresql"),
    ("com.h2database", "h2"),
    ("com.mysql", "mysql"),
    ("org.flywaydb", "flyway"),
    ("org.liquibase", "liquibase"),
    ("redis.clients", "redis"),
    ("software.amazon.awssdk", "aws"),
    ("com.amazonaws", "aws-classic"),
    ("org.projectlombok", "lombok"),
    ("org.mapstruct", "mapstruct"),
    ("com.google.guava", "guava"),
    ("com.google.cloud.tools", "google-cloud-tools"),
    ("jakarta.", "jakarta"),
    ("javax.", "javax"),
];

/// Maven plugin artifact to Gradle plugin id.
const PLUGIN_IDS: &[(&str, &str)] = &[
    ("spring-boot-maven-plugin", "org.springframework.boot"),
    ("kotlin-maven-plugin", "org.jetbrains.kotlin.jvm"),
    ("kotlin-allopen", "org.jetbrains.kotlin.plugin.allopen"),
    ("kotlin-noarg", "org.jetbrains.kotlin.plugin.noarg"),
    ("jib-maven-plugin", "com.google.cloud.tools.jib"),
    ("jacoco-maven-plugin", "jacoco"),
    ("maven-checkstyle-plugin", "checkstyle"),
    ("maven-pmd-plugin", "pmd"),
    ("spotbugs-maven-plugin", "com.github.spotbugs"),
    ("spotless-maven-plugin", "com.diffplug.spotless"),
    ("maven-shade-plugin", "com.github.johnrengelman.shadow"),
    ("maven-war-plugin", "war"),
    ("maven-ear-plugin", "ear"),
    ("maven-application-plugin", "application"),
    ("asciidoctor-maven-plugin", "org.asciidoctor.jvm.convert"),
    ("flyway-maven-plugin", "org.flywaydb.flyway"),
    ("jooq-codegen-maven", "nu.studer.jooq"),
    ("openapi-generator-maven-plugin", "org.openapi.generator"),
    ("protobuf-maven-plugin", "com.google.protobuf"),
    ("git-commit-id-plugin", "com.gorylenko.gradle-git-properties"),
];

/// Maven plugins whose job Gradle covers with built-in tasks or conventions.
const SKIPPED_PLUGINS: &[&str] = &[
    "maven-compiler-plugin",
    "maven-surefire-plugin",
    "maven-failsafe-plugin",
    "maven-resources-plugin",
    "maven-jar-plugin",
    "maven-source-plugin",
    "maven-javadoc-plugin",
    "maven-deploy-plugin",
    "maven-install-plugin",
    "maven-clean-plugin",
    "maven-site-plugin",
    "maven-project-info-reports-plugin",
    "maven-dependency-plugin",
    "maven-enforcer-plugin",
    "maven-release-plugin",
    "versions-maven-plugin",
    "flatten-maven-plugin",
    "maven-antrun-plugin",
];

const PLUGIN_SUFFIXES: &[&str] = &["-gradle-plugin", "-maven-plugin", "-plugin"];

static INVALID_CHARS: OnceLock<Regex> = OnceLock::new();
static DASH_RUNS: OnceLock<Regex> = OnceLock::new();

fn sanitize(raw: &str) -> String {
    let invalid =
        INVALID_CHARS.get_or_init(|| Regex::new(r"[^a-zA-Z0-9-]").expect("valid alias pattern"));
    let dashes = DASH_RUNS.get_or_init(|| Regex::new(r"-+").expect("valid dash pattern"));

    let replaced = invalid.replace_all(raw, "-");
    let collapsed = dashes.replace_all(&replaced, "-");
    collapsed.trim_matches('-').to_lowercase()
}

fn words(s: &str) -> impl Iterator<Item = &str> {
    s.split('-').filter(|w| !w.is_empty())
}

fn short_name_for(group_id: &str) -> Option<&'static str> {
    GROUP_PREFIXES
        .iter()
        .find(|(prefix, _)| group_id.starts_with(prefix))
        .map(|(_, short)| *short)
}

/// Catalog alias for a library coordinate.
///
/// The result is non-empty for non-empty input, contains only `[a-z0-9-]`,
/// never starts or ends with `-`, and never repeats the group short name
/// when the artifact already begins with it.
pub fn to_library_alias(group_id: &str, artifact_id: &str) -> String {
    let alias = match short_name_for(group_id) {
        Some(short) => {
            if short == artifact_id || short.replace('-', "") == artifact_id.replace('-', "") {
                short.to_string()
            } else {
                let overlap = words(short)
                    .zip(words(artifact_id))
                    .take_while(|(s, a)| s == a)
                    .count();
                if overlap > 0 {
                    artifact_id.to_string()
                } else {
                    format!("{}-{}", short, artifact_id)
                }
            }
        }
        None => {
            let segment = group_id.rsplit('.').next().unwrap_or(group_id);
            if artifact_id.starts_with(segment) {
                artifact_id.to_string()
            } else {
                format!("{}-{}", segment, artifact_id)
            }
        }
    };

    sanitize(&alias)
}

pub fn to_version_key(name: &str) -> String {
    sanitize(name)
}

/// Catalog alias for a plugin: the first matching build-tool suffix is
/// dropped before the library alias rules apply.
pub fn to_plugin_alias(group_id: &str, artifact_id: &str) -> String {
    let name = PLUGIN_SUFFIXES
        .iter()
        .find_map(|suffix| artifact_id.strip_suffix(suffix))
        .unwrap_or(artifact_id);
    to_library_alias(group_id, name)
}

pub fn map_scope_to_configuration(scope: &Scope) -> &'static str {
    match scope {
        Scope::Compile => "implementation",
        Scope::Provided => "compileOnly",
        Scope::Runtime => "runtimeOnly",
        Scope::Test => "testImplementation",
        Scope::System => "compileOnly",
        Scope::Import => "platform",
        Scope::Other(_) => "implementation",
    }
}

pub fn gradle_plugin_id(artifact_id: &str) -> Option<&'static str> {
    PLUGIN_IDS
        .iter()
        .find(|(artifact, _)| *artifact == artifact_id)
        .map(|(_, id)| *id)
}

pub fn is_skipped_plugin(artifact_id: &str) -> bool {
    SKIPPED_PLUGINS.contains(&artifact_id)
}

/// Kotlin DSL accessor path for an alias: `spring-boot-starter-web` is
/// reached as `libs.spring.boot.starter.web`.
pub fn to_accessor(alias: &str) -> String {
    alias.replace('-', ".")
}
