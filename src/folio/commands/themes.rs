use crate::commands::{CmdResult, ThemeEntry};
use crate::dataset::Dataset;
use crate::error::Result;

pub fn run<D: Dataset + ?Sized>(dataset: &D) -> Result<CmdResult> {
    let themes = dataset
        .themes()
        .into_iter()
        .map(|(name, colors)| ThemeEntry {
            name: name.to_string(),
            colors,
        })
        .collect();
    Ok(CmdResult::default().with_themes(themes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::memory::fixtures::DatasetFixture;
    use crate::theme::{night_colors, DAY, NIGHT};

    #[test]
    fn lists_themes_by_name() {
        let dataset = DatasetFixture::new().build();
        let result = run(&dataset).unwrap();
        let names: Vec<&str> = result.themes.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec![DAY, NIGHT]);
        assert_eq!(result.themes[1].colors, night_colors());
    }
}
