//! Nested catalog shapes returned by the `/tools` endpoint.
//!
//! - `Catalog`: platform → category → subcategory → tools (no query)
//! - `PlatformTree`: category → subcategory → tool names (`?platform=`)

use serde::{Deserialize, Serialize};

use super::ordered::Ordered;
use super::tool::Tool;

/// Subcategory → tools
pub type Subcategories = Ordered<Vec<Tool>>;

/// Category → subcategories
pub type Categories = Ordered<Subcategories>;

/// Full catalog, in server order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog(pub Ordered<Categories>);

/// A leaf tool with its placement in the catalog
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry<'a> {
    pub platform: &'a str,
    pub category: &'a str,
    pub subcategory: &'a str,
    pub tool: &'a Tool,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder used by tests and fixtures: add one tool at a placement
    pub fn with_tool(mut self, platform: &str, category: &str, subcategory: &str, tool: Tool) -> Self {
        self.0
            .get_or_insert_default(platform)
            .get_or_insert_default(category)
            .get_or_insert_default(subcategory)
            .push(tool);
        self
    }

    /// Flatten every leaf tool in insertion order
    pub fn entries(&self) -> impl Iterator<Item = CatalogEntry<'_>> {
        self.0.iter().flat_map(|(platform, categories)| {
            categories.iter().flat_map(move |(category, subcategories)| {
                subcategories.iter().flat_map(move |(subcategory, tools)| {
                    tools.iter().map(move |tool| CatalogEntry {
                        platform,
                        category,
                        subcategory,
                        tool,
                    })
                })
            })
        })
    }

    /// Total number of leaf tools across all placements
    pub fn tool_count(&self) -> usize {
        self.0
            .values()
            .flat_map(|categories| categories.values())
            .flat_map(|subcategories| subcategories.values())
            .map(Vec::len)
            .sum()
    }

    /// Platform names in server order
    pub fn platforms(&self) -> Vec<&str> {
        self.0.keys().collect()
    }
}

/// Category tree for one platform; subcategories carry tool names only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlatformTree(pub Ordered<Ordered<Vec<String>>>);

impl PlatformTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_subcategory<I, S>(mut self, category: &str, subcategory: &str, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0
            .get_or_insert_default(category)
            .insert(subcategory, tools.into_iter().map(Into::into).collect());
        self
    }

    /// Categories with their subcategory names, in server order
    pub fn categories(&self) -> impl Iterator<Item = (&str, Vec<&str>)> {
        self.0
            .iter()
            .map(|(category, subcategories)| (category, subcategories.keys().collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_JSON: &str = r#"{
        "Phone": {
            "Android": {
                "Reverse Engineering": [
                    {"name": "JADX", "desc": "Dex to Java decompiler", "difficulty": "Beginner"},
                    {"name": "APKTool", "desc": "Reverse engineering APK files", "difficulty": "Intermediate"}
                ],
                "Forensics": [
                    {"name": "MobSF", "desc": "Mobile Security Framework", "difficulty": "Intermediate"}
                ]
            }
        },
        "Linux": {
            "Kali Linux": {
                "Information Gathering": [
                    {"name": "Nmap", "desc": "Network discovery", "difficulty": "Beginner", "command": "nmap -sV target"}
                ],
                "Empty": []
            }
        }
    }"#;

    #[test]
    fn test_catalog_tool_count() {
        let catalog: Catalog = serde_json::from_str(CATALOG_JSON).unwrap();
        assert_eq!(catalog.tool_count(), 4);
        assert_eq!(catalog.entries().count(), 4);
    }

    #[test]
    fn test_catalog_entries_in_document_order() {
        let catalog: Catalog = serde_json::from_str(CATALOG_JSON).unwrap();
        let names: Vec<_> = catalog.entries().map(|e| e.tool.name.as_str()).collect();
        assert_eq!(names, vec!["JADX", "APKTool", "MobSF", "Nmap"]);
        assert_eq!(catalog.platforms(), vec!["Phone", "Linux"]);

        let nmap = catalog.entries().last().unwrap();
        assert_eq!(nmap.platform, "Linux");
        assert_eq!(nmap.category, "Kali Linux");
        assert_eq!(nmap.subcategory, "Information Gathering");
    }

    #[test]
    fn test_catalog_builder() {
        let catalog = Catalog::new()
            .with_tool("network", "scanning", "active", Tool::new("nmap", "scanner", "beginner"))
            .with_tool("network", "scanning", "active", Tool::new("masscan", "fast scanner", "advanced"))
            .with_tool("web", "proxy", "intercept", Tool::new("burp", "proxy", "intermediate"));
        assert_eq!(catalog.tool_count(), 3);
        assert_eq!(catalog.platforms(), vec!["network", "web"]);
    }

    #[test]
    fn test_wide_catalog_decodes() {
        let subcategories = (0..3000)
            .map(|i| format!(r#""s{}": [{{"name": "t{}", "desc": "", "difficulty": "beginner"}}]"#, i, i))
            .collect::<Vec<_>>()
            .join(",");
        let json = format!(r#"{{"p": {{"c": {{{}}}}}}}"#, subcategories);
        let catalog: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(catalog.tool_count(), 3000);
        let last = catalog.entries().last().unwrap();
        assert_eq!(last.subcategory, "s2999");
        assert_eq!(last.tool.name, "t2999");
    }

    #[test]
    fn test_builder_appends_to_existing_placement() {
        let mut catalog = Catalog::new();
        for i in 0..2000 {
            catalog = catalog.with_tool("p", "c", &format!("s{}", i % 10), Tool::new(format!("t{}", i), "", "beginner"));
        }
        assert_eq!(catalog.tool_count(), 2000);
        assert_eq!(catalog.platforms(), vec!["p"]);
        let first: Vec<_> = catalog.entries().take(2).map(|e| e.tool.name.as_str()).collect();
        assert_eq!(first, vec!["t0", "t10"]);
    }

    #[test]
    fn test_platform_tree_rejected_as_catalog() {
        let tree = r#"{"Kali Linux": {"Forensics": ["Autopsy", "Volatility"]}}"#;
        assert!(serde_json::from_str::<Catalog>(tree).is_err());
    }

    #[test]
    fn test_platform_tree_categories() {
        let tree: PlatformTree = serde_json::from_str(
            r#"{"Kali Linux": {"Forensics": ["Autopsy"], "Password_Attacks": ["Hashcat"]}, "Ubuntu": {"Container_Security": []}}"#,
        )
        .unwrap();
        let categories: Vec<_> = tree.categories().collect();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0], ("Kali Linux", vec!["Forensics", "Password_Attacks"]));
        assert_eq!(categories[1], ("Ubuntu", vec!["Container_Security"]));
    }
}
