/// Static home-screen content, shown until the first search completes.
pub fn home_screen() -> Vec<String> {
    vec![
        "Search the Jastrow Dictionary: type a word, pick a suggestion, press Enter.".to_string(),
        String::new(),
        "Just looking to browse? The full Jastrow is on Sefaria:".to_string(),
        "  https://www.sefaria.org/Jastrow?tab=contents".to_string(),
        String::new(),
        "Like this tool? Consider starring it on GitHub:".to_string(),
        "  https://github.com/milon-dev/milon".to_string(),
    ]
}
