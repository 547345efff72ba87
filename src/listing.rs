/// Renders crawl results as a numbered list under a `Links` header.
pub fn format_links(links: &[String]) -> String {
    let mut out = String::from("Links\n-----\n");
    for (i, link) in links.iter().enumerate() {
        out.push_str(&format!("{:03}. {}\n", i + 1, link));
    }
    out.push('\n');
    out
}

pub fn print_links(links: &[String]) {
    print!("{}", format_links(links));
}
