#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    // Icon is optional: only embed version metadata
    let mut res = WindowsResource::new();
    res.set("FileDescription", "Worklocation CLI")
        .set("ProductName", "Worklocation")
        .set("OriginalFilename", "worklocation.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"));

    if let Err(e) = res.compile() {
        println!("cargo:warning=Failed to embed version resource: {e}");
    }
}

#[cfg(not(target_os = "windows"))]
fn main() {}
