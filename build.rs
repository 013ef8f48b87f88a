// Footer copyright year, read through env!("BUILD_TIME") so the server and
// the browser render the same value.
fn main() {
    let built_at = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={built_at}");

    println!("cargo:rerun-if-changed=build.rs");
}
