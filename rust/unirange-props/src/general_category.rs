//! General_Category value names and the categories each one stands for.

use icu_properties::props::GeneralCategory;

use GeneralCategory::*;

const CASED_LETTER: &[GeneralCategory] = &[UppercaseLetter, LowercaseLetter, TitlecaseLetter];
const LETTER: &[GeneralCategory] = &[
    UppercaseLetter,
    LowercaseLetter,
    TitlecaseLetter,
    ModifierLetter,
    OtherLetter,
];
const MARK: &[GeneralCategory] = &[NonspacingMark, SpacingMark, EnclosingMark];
const NUMBER: &[GeneralCategory] = &[DecimalNumber, LetterNumber, OtherNumber];
const PUNCTUATION: &[GeneralCategory] = &[
    ConnectorPunctuation,
    DashPunctuation,
    OpenPunctuation,
    ClosePunctuation,
    InitialPunctuation,
    FinalPunctuation,
    OtherPunctuation,
];
const SYMBOL: &[GeneralCategory] = &[MathSymbol, CurrencySymbol, ModifierSymbol, OtherSymbol];
const SEPARATOR: &[GeneralCategory] = &[SpaceSeparator, LineSeparator, ParagraphSeparator];
const OTHER: &[GeneralCategory] = &[Control, Format, Surrogate, PrivateUse, Unassigned];

/// Looks up a General_Category value by its long name, short name or alias.
///
/// Concrete categories map to themselves; groups such as `L` or `Punctuation`
/// map to all of their member categories.
pub(crate) fn categories_for(value: &str) -> Option<&'static [GeneralCategory]> {
    Some(match value {
        "Cased_Letter" | "LC" => CASED_LETTER,
        "Close_Punctuation" | "Pe" => &[ClosePunctuation],
        "Connector_Punctuation" | "Pc" => &[ConnectorPunctuation],
        "Control" | "Cc" | "cntrl" => &[Control],
        "Currency_Symbol" | "Sc" => &[CurrencySymbol],
        "Dash_Punctuation" | "Pd" => &[DashPunctuation],
        "Decimal_Number" | "Nd" | "digit" => &[DecimalNumber],
        "Enclosing_Mark" | "Me" => &[EnclosingMark],
        "Final_Punctuation" | "Pf" => &[FinalPunctuation],
        "Format" | "Cf" => &[Format],
        "Initial_Punctuation" | "Pi" => &[InitialPunctuation],
        "Letter" | "L" => LETTER,
        "Letter_Number" | "Nl" => &[LetterNumber],
        "Line_Separator" | "Zl" => &[LineSeparator],
        "Lowercase_Letter" | "Ll" => &[LowercaseLetter],
        "Mark" | "M" | "Combining_Mark" => MARK,
        "Math_Symbol" | "Sm" => &[MathSymbol],
        "Modifier_Letter" | "Lm" => &[ModifierLetter],
        "Modifier_Symbol" | "Sk" => &[ModifierSymbol],
        "Nonspacing_Mark" | "Mn" => &[NonspacingMark],
        "Number" | "N" => NUMBER,
        "Open_Punctuation" | "Ps" => &[OpenPunctuation],
        "Other" | "C" => OTHER,
        "Other_Letter" | "Lo" => &[OtherLetter],
        "Other_Number" | "No" => &[OtherNumber],
        "Other_Punctuation" | "Po" => &[OtherPunctuation],
        "Other_Symbol" | "So" => &[OtherSymbol],
        "Paragraph_Separator" | "Zp" => &[ParagraphSeparator],
        "Private_Use" | "Co" => &[PrivateUse],
        "Punctuation" | "P" | "punct" => PUNCTUATION,
        "Separator" | "Z" => SEPARATOR,
        "Space_Separator" | "Zs" => &[SpaceSeparator],
        "Spacing_Mark" | "Mc" => &[SpacingMark],
        "Surrogate" | "Cs" => &[Surrogate],
        "Symbol" | "S" => SYMBOL,
        "Titlecase_Letter" | "Lt" => &[TitlecaseLetter],
        "Unassigned" | "Cn" => &[Unassigned],
        "Uppercase_Letter" | "Lu" => &[UppercaseLetter],
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_and_short_names_agree() {
        assert_eq!(categories_for("Lu"), categories_for("Uppercase_Letter"));
        assert_eq!(categories_for("punct"), categories_for("Punctuation"));
        assert_eq!(categories_for("digit"), Some(&[DecimalNumber][..]));
    }

    #[test]
    fn test_groups_cover_every_category_once() {
        let groups = [LETTER, MARK, NUMBER, PUNCTUATION, SYMBOL, SEPARATOR, OTHER];
        let mut all: Vec<GeneralCategory> = groups.concat();
        let total = all.len();
        all.sort_by_key(|gc| *gc as u8);
        all.dedup();
        assert_eq!(all.len(), total);
        assert_eq!(total, 30);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert!(categories_for("lu").is_none());
        assert!(categories_for("letter").is_none());
        assert!(categories_for("").is_none());
    }
}
