//! Instruction text sent alongside each request.

/// Instruction for drawing a printable line-art page of `subject`.
pub fn line_art_prompt(subject: &str) -> String {
    format!(
        "A high-quality, simple black and white line art coloring page for kids. \
         Subject: {subject}. \
         Pure white background, clean bold black outlines, no grey areas, no shading, \
         minimal detail, professional line art, coloring book style."
    )
}

/// Instruction for coloring an attached line-art image of `subject`.
pub fn color_prompt(subject: &str) -> String {
    format!(
        "Please color this line art vibrantly for a child's coloring book. \
         Maintain the exact same shapes and characters. \
         Make it colorful, cheerful, and bright. The subject is {subject}."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompts_mention_subject() {
        assert!(line_art_prompt("A cute dinosaur").contains("Subject: A cute dinosaur."));
        assert!(color_prompt("A cute dinosaur").ends_with("The subject is A cute dinosaur."));
    }

    #[test]
    fn line_art_prompt_forbids_shading() {
        let prompt = line_art_prompt("a robot");
        assert!(prompt.contains("no shading"));
        assert!(prompt.contains("coloring book style"));
    }
}
