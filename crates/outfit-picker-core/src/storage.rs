//! CSV persistence
//!
//! One garment per line:
//!
//! ```text
//! type,isLong,material,color,pattern
//! ```
//!
//! `isLong` is `true` only for the literal text `true`. The pattern is the rest
//! of the line and may itself contain commas. Text is kept exactly as read.
//! Files are written category by category (jackets, tops, bottoms, shoes), so
//! any file already in that order loads and saves back byte for byte.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::category::Category;
use crate::error::{Result, WardrobeError};
use crate::item::ClothingItem;
use crate::wardrobe::Wardrobe;

const FIELD_COUNT: usize = 5;

/// Load a wardrobe. A missing file is an empty wardrobe.
pub fn load(path: &Path) -> Result<Wardrobe> {
    if !path.exists() {
        info!(path = %path.display(), "no wardrobe file yet, starting empty");
        return Ok(Wardrobe::new());
    }
    let content = fs::read_to_string(path)?;
    let wardrobe = parse(&content)?;
    info!(path = %path.display(), items = wardrobe.len(), "loaded wardrobe");
    Ok(wardrobe)
}

/// Write a wardrobe, creating parent directories as needed
pub fn save(wardrobe: &Wardrobe, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, render(wardrobe))?;
    info!(path = %path.display(), items = wardrobe.len(), "saved wardrobe");
    Ok(())
}

/// Parse records into a wardrobe. Blank lines are skipped.
pub fn parse(content: &str) -> Result<Wardrobe> {
    let mut wardrobe = Wardrobe::new();
    for (index, line) in content.lines().enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            continue;
        }
        wardrobe.add(parse_record(line, index + 1)?);
    }
    Ok(wardrobe)
}

/// Render a wardrobe as records, one line each
pub fn render(wardrobe: &Wardrobe) -> String {
    let mut out = String::new();
    for (_, item) in wardrobe.iter() {
        out.push_str(&render_record(item));
        out.push('\n');
    }
    out
}

fn parse_record(line: &str, line_no: usize) -> Result<ClothingItem> {
    let fields: Vec<&str> = line.splitn(FIELD_COUNT, ',').collect();
    let &[kind, is_long, material, color, pattern] = fields.as_slice() else {
        return Err(WardrobeError::MalformedRecord {
            line: line_no,
            reason: format!(
                "expected {} fields (type,isLong,material,color,pattern), found {}",
                FIELD_COUNT,
                fields.len()
            ),
        });
    };

    let category = Category::resolve(kind).map_err(|e| WardrobeError::MalformedRecord {
        line: line_no,
        reason: e.to_string(),
    })?;

    Ok(ClothingItem::new(
        category,
        is_long == "true",
        material,
        color,
        pattern,
    ))
}

fn render_record(item: &ClothingItem) -> String {
    format!(
        "{},{},{},{},{}",
        item.category().record_name(),
        item.is_long(),
        item.material(),
        item.color(),
        item.pattern()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = "\
jacket,true,wool,black,solid
top,false,cotton,white,striped
top,true,linen,blue,solid
bottom,true,denim,blue,solid
shoes,false,leather,brown,solid
";

    #[test]
    fn parse_routes_records_by_type() {
        let wardrobe = parse(SAMPLE).unwrap();
        assert_eq!(wardrobe.count(Category::Jacket), 1);
        assert_eq!(wardrobe.count(Category::Top), 2);
        assert_eq!(wardrobe.count(Category::Bottom), 1);
        assert_eq!(wardrobe.count(Category::Shoes), 1);
        assert!(wardrobe.items(Category::Jacket)[0].is_long());
        assert!(!wardrobe.items(Category::Top)[0].is_long());
    }

    #[test]
    fn pattern_keeps_embedded_commas() {
        let wardrobe = parse("top,false,cotton,red,plaid, with dots, faded\n").unwrap();
        assert_eq!(
            wardrobe.items(Category::Top)[0].pattern(),
            "plaid, with dots, faded"
        );
    }

    #[test]
    fn is_long_only_for_literal_true() {
        let wardrobe = parse("top,yes,cotton,red,solid\ntop,TRUE,cotton,red,solid\n").unwrap();
        assert!(wardrobe.items(Category::Top).iter().all(|i| !i.is_long()));
    }

    #[test]
    fn skips_blank_lines_and_carriage_returns() {
        let wardrobe = parse("top,true,cotton,red,solid\r\n\r\n\nshoes,false,canvas,white,solid").unwrap();
        assert_eq!(wardrobe.len(), 2);
        assert_eq!(wardrobe.items(Category::Top)[0].pattern(), "solid");
    }

    #[test]
    fn short_line_is_malformed() {
        let err = parse("top,true,cotton,red,solid\ntop,true,cotton\n").unwrap_err();
        match err {
            WardrobeError::MalformedRecord { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("found 3"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_type_is_malformed() {
        let err = parse("hat,false,wool,red,solid\n").unwrap_err();
        match err {
            WardrobeError::MalformedRecord { line, reason } => {
                assert_eq!(line, 1);
                assert!(reason.contains("hat"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn render_groups_categories_in_fixed_order() {
        let wardrobe = parse("shoes,false,leather,brown,solid\ntop,true,linen,blue,solid\njacket,true,wool,black,solid\n").unwrap();
        assert_eq!(
            render(&wardrobe),
            "jacket,true,wool,black,solid\ntop,true,linen,blue,solid\nshoes,false,leather,brown,solid\n"
        );
    }

    #[test]
    fn save_then_load_is_byte_identical() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("wardrobe.csv");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, SAMPLE).unwrap();

        let wardrobe = load(&path).unwrap();
        save(&wardrobe, &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE);
    }

    #[test]
    fn mixed_case_and_padding_survive_round_trip() {
        let content = "top,false,Cotton,Navy Blue,Striped\nshoes,false,leather, brown,solid \n";
        let wardrobe = parse(content).unwrap();

        assert_eq!(render(&wardrobe), content);
        assert_eq!(
            wardrobe.items(Category::Top)[0],
            ClothingItem::new(Category::Top, false, "cotton", "navy blue", "striped")
        );
    }

    #[test]
    fn padded_true_is_not_long() {
        let wardrobe = parse("top, true,cotton,red,solid\ntop,true ,cotton,red,solid\n").unwrap();
        assert!(wardrobe.items(Category::Top).iter().all(|i| !i.is_long()));
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("dirty.csv");
        let wardrobe = parse(SAMPLE).unwrap();

        save(&wardrobe, &path).unwrap();

        assert_eq!(load(&path).unwrap(), wardrobe);
    }

    #[test]
    fn missing_file_loads_empty() {
        let temp = TempDir::new().unwrap();
        let wardrobe = load(&temp.path().join("nope.csv")).unwrap();
        assert!(wardrobe.is_empty());
    }

    #[test]
    fn empty_wardrobe_renders_empty_file() {
        assert_eq!(render(&Wardrobe::new()), "");
    }
}
