//! Base partition: typographic and symbolic characters used constantly in
//! web work — punctuation, currency, math, arrows, and legal marks.

use super::{build_category, Category};

pub(super) fn categories() -> Vec<Category> {
    vec![
        build_category("punctuation", "Punctuation & Quotes", "❝", PUNCTUATION),
        build_category("currency", "Currency", "💰", CURRENCY),
        build_category("math", "Mathematical", "➗", MATH),
        build_category("arrows", "Arrows", "➡", ARROWS),
        build_category("legal", "Legal & Marks", "™", LEGAL),
    ]
}

const PUNCTUATION: &[(u32, &str)] = &[
    (0x00A1, "Inverted exclamation mark"),
    (0x00BF, "Inverted question mark"),
    (0x2013, "En dash"),
    (0x2014, "Em dash"),
    (0x2018, "Left single quotation mark"),
    (0x2019, "Right single quotation mark"),
    (0x201C, "Left double quotation mark"),
    (0x201D, "Right double quotation mark"),
    (0x2026, "Horizontal ellipsis"),
    (0x00AB, "Left-pointing double angle quotation mark"),
    (0x00BB, "Right-pointing double angle quotation mark"),
    (0x2039, "Single left-pointing angle quotation mark"),
    (0x203A, "Single right-pointing angle quotation mark"),
    (0x2022, "Bullet"),
    (0x00B7, "Middle dot"),
    (0x2020, "Dagger"),
    (0x2021, "Double dagger"),
    (0x00A7, "Section sign"),
    (0x00B6, "Pilcrow sign"),
    (0x2030, "Per mille sign"),
];

const CURRENCY: &[(u32, &str)] = &[
    (0x0024, "Dollar sign"),
    (0x00A2, "Cent sign"),
    (0x00A3, "Pound sign"),
    (0x00A5, "Yen sign"),
    (0x20AC, "Euro sign"),
    (0x20B9, "Indian rupee sign"),
    (0x20BD, "Ruble sign"),
    (0x20A9, "Won sign"),
    (0x20AA, "New shekel sign"),
    (0x0E3F, "Thai currency symbol baht"),
    (0x20A6, "Naira sign"),
    (0x20B4, "Hryvnia sign"),
    (0x20BF, "Bitcoin sign"),
];

const MATH: &[(u32, &str)] = &[
    (0x00B1, "Plus-minus sign"),
    (0x00D7, "Multiplication sign"),
    (0x00F7, "Division sign"),
    (0x2260, "Not equal to"),
    (0x2248, "Almost equal to"),
    (0x2264, "Less-than or equal to"),
    (0x2265, "Greater-than or equal to"),
    (0x221E, "Infinity"),
    (0x221A, "Square root"),
    (0x2211, "N-ary summation"),
    (0x220F, "N-ary product"),
    (0x222B, "Integral"),
    (0x2206, "Increment"),
    (0x03C0, "Greek small letter pi"),
    (0x2205, "Empty set"),
    (0x2208, "Element of"),
    (0x2229, "Intersection"),
    (0x222A, "Union"),
    (0x00B0, "Degree sign"),
    (0x2032, "Prime"),
    (0x2033, "Double prime"),
    (0x00BD, "Vulgar fraction one half"),
    (0x00BC, "Vulgar fraction one quarter"),
    (0x00BE, "Vulgar fraction three quarters"),
];

const ARROWS: &[(u32, &str)] = &[
    (0x2190, "Leftwards arrow"),
    (0x2191, "Upwards arrow"),
    (0x2192, "Rightwards arrow"),
    (0x2193, "Downwards arrow"),
    (0x2194, "Left right arrow"),
    (0x2195, "Up down arrow"),
    (0x2196, "North west arrow"),
    (0x2197, "North east arrow"),
    (0x2198, "South east arrow"),
    (0x2199, "South west arrow"),
    (0x21B5, "Downwards arrow with corner leftwards"),
    (0x21C4, "Rightwards arrow over leftwards arrow"),
    (0x21D0, "Leftwards double arrow"),
    (0x21D2, "Rightwards double arrow"),
    (0x21D4, "Left right double arrow"),
    (0x27A4, "Black rightwards arrowhead"),
];

const LEGAL: &[(u32, &str)] = &[
    (0x00A9, "Copyright sign"),
    (0x00AE, "Registered sign"),
    (0x2122, "Trade mark sign"),
    (0x2117, "Sound recording copyright"),
    (0x2120, "Service mark"),
    (0x2116, "Numero sign"),
    (0x2105, "Care of"),
];
