//! Input providers for the interactive session

use colored::Colorize;
use dialoguer::{Confirm, Input};
use outfit_picker_core::{Category, ClothingItem, Result, WardrobeError};

/// Source of answers for the interactive session
pub trait Prompter {
    /// Ask a yes/no question
    fn confirm(&mut self, prompt: &str) -> Result<bool>;

    /// Ask for a line of free text
    fn text(&mut self, prompt: &str) -> Result<String>;
}

/// Prompts on the controlling terminal
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .interact()
            .map_err(prompt_error)
    }

    fn text(&mut self, prompt: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)
    }
}

fn prompt_error(err: dialoguer::Error) -> WardrobeError {
    WardrobeError::Prompt(err.to_string())
}

/// Ask for every field of a garment. The type is asked again until it resolves.
pub fn capture_item<P: Prompter + ?Sized>(prompter: &mut P) -> Result<ClothingItem> {
    let category = loop {
        let raw = prompter.text("Enter clothing type (Jacket/Top/Bottom/Shoes)")?;
        match Category::resolve(&raw) {
            Ok(category) => break category,
            Err(e) => eprintln!("{} {}", "[ERROR]".red().bold(), e),
        }
    };
    let is_long = prompter.confirm("Is it long-sleeved or long-pants?")?;
    let material = prompter.text("Enter clothing material")?;
    let color = prompter.text("Enter clothing color")?;
    let pattern = prompter.text("Enter clothing pattern")?;

    Ok(ClothingItem::new(category, is_long, material, color, pattern).normalized())
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    #[test]
    fn capture_item_normalizes_answers() {
        let mut prompter = ScriptedPrompter::new(describe("Top", true, "Cotton", "Navy", "Striped"));
        let item = capture_item(&mut prompter).unwrap();
        assert_eq!(
            item,
            ClothingItem::new(Category::Top, true, "cotton", "navy", "striped")
        );
        assert_eq!(item.material(), "cotton");
        assert_eq!(item.pattern(), "striped");
        assert_eq!(prompter.remaining(), 0);
    }

    #[test]
    fn capture_item_asks_type_again_until_valid() {
        let mut answers = vec![Answer::Text("hat".to_string()), Answer::Text("".to_string())];
        answers.extend(describe("shoes", false, "leather", "brown", "solid"));
        let mut prompter = ScriptedPrompter::new(answers);

        let item = capture_item(&mut prompter).unwrap();

        assert_eq!(item.category(), Category::Shoes);
        assert_eq!(
            prompter
                .asked
                .iter()
                .filter(|p| p.starts_with("Enter clothing type"))
                .count(),
            3
        );
    }

    #[test]
    fn exhausted_script_is_an_error() {
        let mut prompter = ScriptedPrompter::new(vec![Answer::Text("top".to_string())]);
        assert!(matches!(
            capture_item(&mut prompter),
            Err(WardrobeError::Prompt(_))
        ));
    }
}
