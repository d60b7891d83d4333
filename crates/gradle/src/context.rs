use crate::catalog::{LibraryEntry, VersionCatalog};
use gradlify_maven::{Dependency, Module};

/// Everything a build file generator needs beyond the module itself.
#[derive(Debug, Clone, Copy)]
pub struct BuildContext<'a> {
    pub root: &'a Module,
    pub children: &'a [Module],
    pub catalog: &'a VersionCatalog,
}

impl<'a> BuildContext<'a> {
    pub fn new(root: &'a Module, children: &'a [Module], catalog: &'a VersionCatalog) -> Self {
        Self {
            root,
            children,
            catalog,
        }
    }

    pub fn is_multi_module(&self) -> bool {
        !self.root.modules.is_empty()
    }

    /// A `pom`-packaged module in a multi-module build. Such modules only
    /// coordinate their children and get no compile setup of their own.
    pub fn is_aggregator(&self, module: &Module) -> bool {
        self.is_multi_module() && module.packaging == "pom"
    }

    /// Gradle project path when `dep` points at a module of this build.
    pub fn project_path(&self, dep: &Dependency) -> Option<String> {
        if dep.group_id != self.root.group_id {
            return None;
        }
        if dep.artifact_id == self.root.artifact_id {
            return Some(":".to_string());
        }
        self.children
            .iter()
            .find(|child| child.artifact_id == dep.artifact_id)
            .map(|child| format!(":{}", include_path(child)))
    }

    pub fn library(&self, dep: &Dependency) -> Option<&'a LibraryEntry> {
        self.catalog.library(&dep.group_id, &dep.artifact_id)
    }
}

/// `a/b` source directories become the `a:b` include path.
pub fn include_path(module: &Module) -> String {
    module
        .source_dir
        .as_deref()
        .unwrap_or(&module.artifact_id)
        .replace('/', ":")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_catalog;
    use yare::parameterized;

    fn child(artifact: &str, dir: &str) -> Module {
        let mut module = Module::new("com.example", artifact);
        module.source_dir = Some(dir.to_string());
        module
    }

    #[test]
    fn test_project_path_uses_source_dir() {
        let mut root = Module::new("com.example", "parent");
        root.packaging = "pom".to_string();
        root.modules = vec!["services".to_string()];
        let children = vec![child("orders-service", "services/orders")];
        let catalog = build_catalog(&root, &children);
        let ctx = BuildContext::new(&root, &children, &catalog);

        assert!(ctx.is_multi_module());
        assert!(ctx.is_aggregator(&root));
        assert!(!ctx.is_aggregator(&children[0]));
        assert_eq!(
            ctx.project_path(&Dependency::new("com.example", "orders-service")).as_deref(),
            Some(":services:orders")
        );
        assert_eq!(
            ctx.project_path(&Dependency::new("com.example", "parent")).as_deref(),
            Some(":")
        );
        assert_eq!(ctx.project_path(&Dependency::new("org.other", "orders-service")), None);
    }

    #[test]
    fn test_single_module_is_never_aggregator() {
        let mut root = Module::new("com.example", "bom-only");
        root.packaging = "pom".to_string();
        let catalog = build_catalog(&root, &[]);
        let ctx = BuildContext::new(&root, &[], &catalog);

        assert!(!ctx.is_multi_module());
        assert!(!ctx.is_aggregator(&root));
    }

    #[parameterized(
        top_level = { Some("web"), "web" },
        nested = { Some("services/billing/api"), "services:billing:api" },
        no_source_dir = { None, "orders" },
    )]
    fn test_include_path(source_dir: Option<&str>, expected: &str) {
        let mut module = Module::new("com.example", "orders");
        module.source_dir = source_dir.map(str::to_string);
        assert_eq!(include_path(&module), expected);
    }
}
