use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Drop config.toml next to the compiled binary so Config::load
    // can find it without a working-directory assumption
    let out_dir = env::var("OUT_DIR").unwrap();
    let target_dir = Path::new(&out_dir)
        .ancestors()
        .nth(3)
        .expect("unexpected OUT_DIR layout");

    fs::copy("config.toml", target_dir.join("config.toml")).unwrap();

    println!("cargo:rerun-if-changed=config.toml");
}
