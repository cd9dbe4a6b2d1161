// File: crates/chart-core/build.rs
// Summary: Links the Windows registry library Skia's font/ICU lookup needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends
        println!("cargo:rustc-link-lib=advapi32");
    }
}
