/// Rebuild whenever the bundled assets change.
///
/// `include_dir!()` embeds `assets/` at compile time but does not register
/// the files with cargo's change tracking on stable.
fn main() {
    println!("cargo::rerun-if-changed=assets");
}
