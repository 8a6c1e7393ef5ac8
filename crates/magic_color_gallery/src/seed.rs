//! Example pages shown on first launch.

use magic_color_core::{ColoringPage, ImageRef};

const SEEDS: [(&str, &str, &str); 3] = [
    (
        "1",
        "A cute baby dragon with wings",
        "https://picsum.photos/seed/dragon/800/800",
    ),
    (
        "2",
        "A magical unicorn in space",
        "https://picsum.photos/seed/unicorn/800/800",
    ),
    (
        "3",
        "A happy cat eating pizza",
        "https://picsum.photos/seed/cat/800/800",
    ),
];

/// The fixed starter pages, stamped with `now` (epoch milliseconds).
pub fn seed_pages(now: i64) -> Vec<ColoringPage> {
    SEEDS
        .iter()
        .map(|(id, prompt, url)| {
            ColoringPage::from_parts(*id, *prompt, ImageRef::Remote(url.to_string()), now)
        })
        .collect()
}
