//! Closed value sets the document API accepts for enumerated fields.

use serde::{Deserialize, Serialize};

macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }

            pub fn wire_values() -> Vec<&'static str> {
                Self::ALL.iter().map(|value| value.as_str()).collect()
            }
        }
    };
}

wire_enum!(SuggestionsViewMode {
    DefaultForCurrentAccess => "DEFAULT_FOR_CURRENT_ACCESS",
    SuggestionsInline => "SUGGESTIONS_INLINE",
    PreviewSuggestionsAccepted => "PREVIEW_SUGGESTIONS_ACCEPTED",
    PreviewWithoutSuggestions => "PREVIEW_WITHOUT_SUGGESTIONS",
});

wire_enum!(
    #[derive(Default)]
    DimensionUnit {
        #[default]
        Pt => "PT",
        Emu => "EMU",
    }
);

wire_enum!(BaselineOffset {
    None => "NONE",
    Superscript => "SUPERSCRIPT",
    Subscript => "SUBSCRIPT",
});

wire_enum!(NamedStyleType {
    NormalText => "NORMAL_TEXT",
    Title => "TITLE",
    Subtitle => "SUBTITLE",
    Heading1 => "HEADING_1",
    Heading2 => "HEADING_2",
    Heading3 => "HEADING_3",
    Heading4 => "HEADING_4",
    Heading5 => "HEADING_5",
    Heading6 => "HEADING_6",
});

wire_enum!(Alignment {
    Start => "START",
    Center => "CENTER",
    End => "END",
    Justified => "JUSTIFIED",
});

wire_enum!(ContentDirection {
    LeftToRight => "LEFT_TO_RIGHT",
    RightToLeft => "RIGHT_TO_LEFT",
});

wire_enum!(BulletPreset {
    DiscCircleSquare => "BULLET_DISC_CIRCLE_SQUARE",
    DiamondxArrow3dSquare => "BULLET_DIAMONDX_ARROW3D_SQUARE",
    Checkbox => "BULLET_CHECKBOX",
    ArrowDiamondDisc => "BULLET_ARROW_DIAMOND_DISC",
    StarCircleSquare => "BULLET_STAR_CIRCLE_SQUARE",
    Arrow3dCircleSquare => "BULLET_ARROW3D_CIRCLE_SQUARE",
    LefttriangleDiamondDisc => "BULLET_LEFTTRIANGLE_DIAMOND_DISC",
    DiamondxHollowdiamondSquare => "BULLET_DIAMONDX_HOLLOWDIAMOND_SQUARE",
    NumberedDecimalAlphaRoman => "NUMBERED_DECIMAL_ALPHA_ROMAN",
    NumberedDecimalAlphaRomanParens => "NUMBERED_DECIMAL_ALPHA_ROMAN_PARENS",
    NumberedDecimalNested => "NUMBERED_DECIMAL_NESTED",
    NumberedUpperalphaAlphaRoman => "NUMBERED_UPPERALPHA_ALPHA_ROMAN",
    NumberedUpperromanUpperalphaDecimal => "NUMBERED_UPPERROMAN_UPPERALPHA_DECIMAL",
    NumberedZerodecimalAlphaRoman => "NUMBERED_ZERODECIMAL_ALPHA_ROMAN",
});

wire_enum!(HeaderFooterType {
    Default => "DEFAULT",
});

wire_enum!(SectionType {
    NextPage => "NEXT_PAGE",
    Continuous => "CONTINUOUS",
});

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_as_wire_string() {
        assert_eq!(
            serde_json::to_value(NamedStyleType::Heading2).expect("value"),
            json!("HEADING_2")
        );
        assert_eq!(DimensionUnit::default().as_str(), "PT");
    }

    #[test]
    fn rejects_values_outside_the_set() {
        let parsed: Result<Alignment, _> = serde_json::from_value(json!("LEFT"));
        assert!(parsed.is_err());
    }

    #[test]
    fn bullet_presets_are_complete() {
        assert_eq!(BulletPreset::wire_values().len(), 14);
        assert!(BulletPreset::wire_values().contains(&"BULLET_CHECKBOX"));
    }
}
