fn main() {
    // Compile the SLINT UI
    slint_build::compile("ui/main.slint").unwrap();
}
