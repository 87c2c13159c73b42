// Choice enums to represent the two menu screens
use crate::error::MenuError;

/// Top-level menu choices
#[derive(Debug, PartialEq)]
pub enum TopChoice {
    CreateFile,
    ListVolumes,
    SelectFile,
    Exit,
    Unknown(i32),
}

/// File action menu choices, shown once a file is selected
#[derive(Debug, PartialEq)]
pub enum FileAction {
    WriteLine,
    PrintFile,
    Delete,
    WriteJson,
    PrintJson,
    WriteXml,
    PrintXml,
    Archive,
    Unknown(i32),
}

/// Outcome of handling a top-level choice
#[derive(Debug, PartialEq)]
pub enum MenuResult {
    Continue,
    Exit,
}

// Parse raw menu input into an integer choice
pub fn parse_choice(raw: &str) -> Result<i32, MenuError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i32>()
        .map_err(|_| MenuError::NotANumber(trimmed.to_string()))
}

impl From<i32> for TopChoice {
    fn from(choice: i32) -> Self {
        match choice {
            1 => TopChoice::CreateFile,
            2 => TopChoice::ListVolumes,
            3 => TopChoice::SelectFile,
            0 => TopChoice::Exit,
            other => TopChoice::Unknown(other),
        }
    }
}

impl From<i32> for FileAction {
    fn from(choice: i32) -> Self {
        match choice {
            1 => FileAction::WriteLine,
            2 => FileAction::PrintFile,
            3 => FileAction::Delete,
            4 => FileAction::WriteJson,
            5 => FileAction::PrintJson,
            6 => FileAction::WriteXml,
            7 => FileAction::PrintXml,
            8 => FileAction::Archive,
            other => FileAction::Unknown(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_choices() {
        assert_eq!(parse_choice("1"), Ok(1));
        assert_eq!(parse_choice("0"), Ok(0));
        assert_eq!(parse_choice("8"), Ok(8));
        assert_eq!(parse_choice("-5"), Ok(-5));
    }

    #[test]
    fn test_parse_with_whitespace() {
        assert_eq!(parse_choice("  2  "), Ok(2));
        assert_eq!(parse_choice("\t3\n"), Ok(3));
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        assert_eq!(
            parse_choice("abc"),
            Err(MenuError::NotANumber("abc".to_string()))
        );
        assert_eq!(parse_choice(""), Err(MenuError::NotANumber("".to_string())));
        assert_eq!(
            parse_choice("1.5"),
            Err(MenuError::NotANumber("1.5".to_string()))
        );
    }

    #[test]
    fn test_top_choice_mapping() {
        assert_eq!(TopChoice::from(1), TopChoice::CreateFile);
        assert_eq!(TopChoice::from(2), TopChoice::ListVolumes);
        assert_eq!(TopChoice::from(3), TopChoice::SelectFile);
        assert_eq!(TopChoice::from(0), TopChoice::Exit);
        assert_eq!(TopChoice::from(9), TopChoice::Unknown(9));
        assert_eq!(TopChoice::from(-1), TopChoice::Unknown(-1));
    }

    #[test]
    fn test_file_action_mapping() {
        assert_eq!(FileAction::from(1), FileAction::WriteLine);
        assert_eq!(FileAction::from(4), FileAction::WriteJson);
        assert_eq!(FileAction::from(8), FileAction::Archive);
        assert_eq!(FileAction::from(42), FileAction::Unknown(42));
    }
}
