fn main() {
    modbind_build::generate_proxies()
        .scan_path("src/")
        .output_dir("src/generated")
        .cargo_warnings(false)
        .run()
        .expect("Failed to generate module proxies");

    println!("cargo:rerun-if-changed=src/interop");
    println!("cargo:rerun-if-changed=src/types.rs");
}
