extern crate gl_generator;

use gl_generator::{Api, Fallbacks, GlobalGenerator, Profile, Registry};
use std::env;
use std::fs::File;
use std::path::Path;

fn main() {
    let dest = env::var("OUT_DIR").unwrap();
    let mut file = File::create(Path::new(&dest).join("bindings.rs")).unwrap();
    println!("cargo:rerun-if-changed=build.rs");
    Registry::new(Api::Gl, (3, 3), Profile::Core, Fallbacks::All, ["GL_KHR_debug"])
        .write_bindings(GlobalGenerator, &mut file)
        .unwrap();
}
