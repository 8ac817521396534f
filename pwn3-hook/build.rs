// Build script for the preload library
fn main() {
    let target = std::env::var("TARGET").unwrap_or_default();

    // The host layout is an x86-64 Itanium ABI contract
    if !(target.starts_with("x86_64") && target.contains("linux")) {
        println!(
            "cargo:warning=pwn3-hook host layout is only valid on x86_64 Linux, building for: {}",
            target
        );
    }

    println!("cargo:rerun-if-changed=build.rs");
}
