use std::fs;

fn main() {
    // 读取 VERSION 文件，缺失时回退到 Cargo 版本
    let version = fs::read_to_string("VERSION")
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=APP_VERSION={}", version);

    // 模板或 VERSION 变更时重新运行
    println!("cargo:rerun-if-changed=VERSION");
    println!("cargo:rerun-if-changed=embedded/templates");
}
