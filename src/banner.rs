//! Welcome banner.
//!
//! Printed only when a caller asks for it; loading the library has no
//! console side effects.

/// Go package name used when none is configured
pub const DEFAULT_GO_PACKAGE: &str = "unknown";

/// The two informational lines shown to new users
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    package_name: String,
    go_package_name: String,
}

impl Banner {
    pub fn new(package_name: impl Into<String>, go_package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            go_package_name: go_package_name.into(),
        }
    }

    /// Banner for this crate. Blank or missing Go package names fall back
    /// to [`DEFAULT_GO_PACKAGE`].
    pub fn for_crate(go_package: Option<String>) -> Self {
        let go_package = go_package
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GO_PACKAGE.to_string());
        Self::new(env!("CARGO_PKG_NAME"), go_package)
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn go_package_name(&self) -> &str {
        &self.go_package_name
    }

    pub fn lines(&self) -> [String; 2] {
        [
            format!(
                "Welcome to {} - Rust port of {}!",
                self.package_name, self.go_package_name
            ),
            "Run the setup script to set up the Go reference repository.".to_string(),
        ]
    }

    /// Write the banner to stdout
    pub fn print(&self) {
        for line in self.lines() {
            println!("{}", line);
        }
    }
}
