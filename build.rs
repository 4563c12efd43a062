fn main() {
    // `roxplan version` reports when the binary was built
    let built = chrono::Utc::now().format("%Y-%m-%d %H:%M UTC");
    println!("cargo:rustc-env=BUILD_DATE={built}");
}
