//! Recognition of the property names accepted in `\p{...}` character classes.

use icu_properties::{CodePointSetData, CodePointSetDataBorrowed};

/// A property recognized by name.
///
/// The set of properties is the one ECMAScript accepts in `\p{...}`:
/// - binary properties: <https://tc39.es/ecma262/#table-binary-unicode-properties>
/// - enumerated properties: <https://tc39.es/ecma262/#table-nonbinary-unicode-properties>
/// - the `Any`, `ASCII` and `Assigned` special cases:
///   <https://unicode.org/reports/tr18/#General_Category_Property>
pub(crate) enum Property {
    Binary(CodePointSetDataBorrowed<'static>),

    GeneralCategory,
    Script,
    ScriptExtensions,

    Any,
    Ascii,
    Assigned,
}

impl Property {
    /// Looks up a property by its long name or short alias. Matching is exact.
    pub(crate) fn from_name(name: &str) -> Option<Property> {
        Some(match name {
            "General_Category" | "gc" => Property::GeneralCategory,
            "Script" | "sc" => Property::Script,
            "Script_Extensions" | "scx" => Property::ScriptExtensions,

            "Any" => Property::Any,
            "ASCII" => Property::Ascii,
            "Assigned" => Property::Assigned,

            _ => Property::Binary(binary_property_set(name)?),
        })
    }

    /// Returns `true` for properties that are selected by a value (`Script=Greek`).
    pub(crate) fn takes_value(&self) -> bool {
        matches!(
            self,
            Property::GeneralCategory | Property::Script | Property::ScriptExtensions
        )
    }
}

/// Resolves an ECMAScript binary property name to its code point set.
fn binary_property_set(name: &str) -> Option<CodePointSetDataBorrowed<'static>> {
    use icu_properties::props::*;

    Some(match name {
        "ASCII_Hex_Digit" | "AHex" => CodePointSetData::new::<AsciiHexDigit>(),
        "Alphabetic" | "Alpha" => CodePointSetData::new::<Alphabetic>(),
        "Bidi_Control" | "Bidi_C" => CodePointSetData::new::<BidiControl>(),
        "Bidi_Mirrored" | "Bidi_M" => CodePointSetData::new::<BidiMirrored>(),
        "Case_Ignorable" | "CI" => CodePointSetData::new::<CaseIgnorable>(),
        "Cased" => CodePointSetData::new::<Cased>(),
        "Changes_When_Casefolded" | "CWCF" => CodePointSetData::new::<ChangesWhenCasefolded>(),
        "Changes_When_Casemapped" | "CWCM" => CodePointSetData::new::<ChangesWhenCasemapped>(),
        "Changes_When_Lowercased" | "CWL" => CodePointSetData::new::<ChangesWhenLowercased>(),
        "Changes_When_NFKC_Casefolded" | "CWKCF" => {
            CodePointSetData::new::<ChangesWhenNfkcCasefolded>()
        }
        "Changes_When_Titlecased" | "CWT" => CodePointSetData::new::<ChangesWhenTitlecased>(),
        "Changes_When_Uppercased" | "CWU" => CodePointSetData::new::<ChangesWhenUppercased>(),
        "Dash" => CodePointSetData::new::<Dash>(),
        "Default_Ignorable_Code_Point" | "DI" => {
            CodePointSetData::new::<DefaultIgnorableCodePoint>()
        }
        "Deprecated" | "Dep" => CodePointSetData::new::<Deprecated>(),
        "Diacritic" | "Dia" => CodePointSetData::new::<Diacritic>(),
        "Emoji" => CodePointSetData::new::<Emoji>(),
        "Emoji_Component" | "EComp" => CodePointSetData::new::<EmojiComponent>(),
        "Emoji_Modifier" | "EMod" => CodePointSetData::new::<EmojiModifier>(),
        "Emoji_Modifier_Base" | "EBase" => CodePointSetData::new::<EmojiModifierBase>(),
        "Emoji_Presentation" | "EPres" => CodePointSetData::new::<EmojiPresentation>(),
        "Extended_Pictographic" | "ExtPict" => CodePointSetData::new::<ExtendedPictographic>(),
        "Extender" | "Ext" => CodePointSetData::new::<Extender>(),
        "Grapheme_Base" | "Gr_Base" => CodePointSetData::new::<GraphemeBase>(),
        "Grapheme_Extend" | "Gr_Ext" => CodePointSetData::new::<GraphemeExtend>(),
        "Hex_Digit" | "Hex" => CodePointSetData::new::<HexDigit>(),
        "IDS_Binary_Operator" | "IDSB" => CodePointSetData::new::<IdsBinaryOperator>(),
        "IDS_Trinary_Operator" | "IDST" => CodePointSetData::new::<IdsTrinaryOperator>(),
        "ID_Continue" | "IDC" => CodePointSetData::new::<IdContinue>(),
        "ID_Start" | "IDS" => CodePointSetData::new::<IdStart>(),
        "Ideographic" | "Ideo" => CodePointSetData::new::<Ideographic>(),
        "Join_Control" | "Join_C" => CodePointSetData::new::<JoinControl>(),
        "Logical_Order_Exception" | "LOE" => CodePointSetData::new::<LogicalOrderException>(),
        "Lowercase" | "Lower" => CodePointSetData::new::<Lowercase>(),
        "Math" => CodePointSetData::new::<Math>(),
        "Noncharacter_Code_Point" | "NChar" => CodePointSetData::new::<NoncharacterCodePoint>(),
        "Pattern_Syntax" | "Pat_Syn" => CodePointSetData::new::<PatternSyntax>(),
        "Pattern_White_Space" | "Pat_WS" => CodePointSetData::new::<PatternWhiteSpace>(),
        "Quotation_Mark" | "QMark" => CodePointSetData::new::<QuotationMark>(),
        "Radical" => CodePointSetData::new::<Radical>(),
        "Regional_Indicator" | "RI" => CodePointSetData::new::<RegionalIndicator>(),
        "Sentence_Terminal" | "STerm" => CodePointSetData::new::<SentenceTerminal>(),
        "Soft_Dotted" | "SD" => CodePointSetData::new::<SoftDotted>(),
        "Terminal_Punctuation" | "Term" => CodePointSetData::new::<TerminalPunctuation>(),
        "Unified_Ideograph" | "UIdeo" => CodePointSetData::new::<UnifiedIdeograph>(),
        "Uppercase" | "Upper" => CodePointSetData::new::<Uppercase>(),
        "Variation_Selector" | "VS" => CodePointSetData::new::<VariationSelector>(),
        "White_Space" | "space" => CodePointSetData::new::<WhiteSpace>(),
        "XID_Continue" | "XIDC" => CodePointSetData::new::<XidContinue>(),
        "XID_Start" | "XIDS" => CodePointSetData::new::<XidStart>(),
        _ => return None,
    })
}
