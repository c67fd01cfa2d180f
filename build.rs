fn main() {
    // Only compile Windows resources on Windows
    #[cfg(target_os = "windows")]
    {
        let mut res = winres::WindowsResource::new();
        res.set("ProductName", "Luny Text");
        res.set("FileDescription", "Text and markdown editor");
        res.set("OriginalFilename", "luny-text.exe");
        res.compile().expect("Failed to compile Windows resources");
    }
}
