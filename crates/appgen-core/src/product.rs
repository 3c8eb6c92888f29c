//! Framework configuration trait for app generator binaries
//!
//! Each product binary implements this trait to bind the generator core to
//! a concrete framework convention:
//! - Product identity (name, display name)
//! - The framework npm package the scaffold depends on
//! - Build and dev-server entry points inside that package
//! - Documentation links

/// Configuration trait for different framework products
pub trait FrameworkConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for package identifiers)
    fn name(&self) -> &'static str;

    /// Human-readable display name; also the global namespace used by
    /// generated application code
    fn display_name(&self) -> &'static str;

    /// npm package the generated workspace depends on
    fn npm_package(&self) -> &'static str;

    /// Version requirement written into the generated project descriptor
    fn npm_package_version(&self) -> &'static str;

    /// Path of the build script inside the installed framework package,
    /// relative to the workspace root
    fn build_script(&self) -> &'static str;

    /// Fixed arguments passed to the build script for a non-interactive
    /// initial build
    fn build_args(&self) -> &'static [&'static str];

    /// Name of the package script that starts the development server
    fn server_script(&self) -> &'static str;

    /// URL for framework documentation
    fn docs_url(&self) -> &'static str;
}
