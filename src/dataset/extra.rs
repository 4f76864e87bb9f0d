//! Extra partition: decorative and structural symbols — stars, geometric
//! shapes, box drawing, checkmarks, and the miscellaneous symbols block.

use super::{build_category, Category};

pub(super) fn categories() -> Vec<Category> {
    vec![
        build_category("stars", "Stars & Sparkles", "⭐", STARS),
        build_category("shapes", "Geometric Shapes", "🔷", SHAPES),
        build_category("box-drawing", "Box Drawing", "┏", BOX_DRAWING),
        build_category("checks", "Checks & Crosses", "✅", CHECKS),
        build_category("misc", "Miscellaneous Symbols", "☯", MISC),
    ]
}

const STARS: &[(u32, &str)] = &[
    (0x2605, "Black star"),
    (0x2606, "White star"),
    (0x2726, "Black four pointed star"),
    (0x2727, "White four pointed star"),
    (0x2728, "Sparkles"),
    (0x2735, "Eight pointed pinwheel star"),
    (0x2736, "Six pointed black star"),
    (0x2737, "Eight pointed rectilinear black star"),
    (0x2739, "Twelve pointed black star"),
    (0x273B, "Teardrop-spoked asterisk"),
    (0x2742, "Circled open centre eight pointed star"),
];

const SHAPES: &[(u32, &str)] = &[
    (0x25A0, "Black square"),
    (0x25A1, "White square"),
    (0x25AA, "Black small square"),
    (0x25AB, "White small square"),
    (0x25B2, "Black up-pointing triangle"),
    (0x25B3, "White up-pointing triangle"),
    (0x25BC, "Black down-pointing triangle"),
    (0x25BD, "White down-pointing triangle"),
    (0x25C6, "Black diamond"),
    (0x25C7, "White diamond"),
    (0x25CA, "Lozenge"),
    (0x25CB, "White circle"),
    (0x25CF, "Black circle"),
    (0x25D0, "Circle with left half black"),
    (0x25D1, "Circle with right half black"),
    (0x25E6, "White bullet"),
];

const BOX_DRAWING: &[(u32, &str)] = &[
    (0x2500, "Box drawings light horizontal"),
    (0x2502, "Box drawings light vertical"),
    (0x250C, "Box drawings light down and right"),
    (0x2510, "Box drawings light down and left"),
    (0x2514, "Box drawings light up and right"),
    (0x2518, "Box drawings light up and left"),
    (0x251C, "Box drawings light vertical and right"),
    (0x2524, "Box drawings light vertical and left"),
    (0x252C, "Box drawings light down and horizontal"),
    (0x2534, "Box drawings light up and horizontal"),
    (0x253C, "Box drawings light vertical and horizontal"),
    (0x2550, "Box drawings double horizontal"),
    (0x2551, "Box drawings double vertical"),
    (0x2554, "Box drawings double down and right"),
    (0x2557, "Box drawings double down and left"),
    (0x255A, "Box drawings double up and right"),
    (0x255D, "Box drawings double up and left"),
    (0x2591, "Light shade"),
    (0x2592, "Medium shade"),
    (0x2593, "Dark shade"),
];

const CHECKS: &[(u32, &str)] = &[
    (0x2713, "Check mark"),
    (0x2714, "Heavy check mark"),
    (0x2715, "Multiplication X"),
    (0x2716, "Heavy multiplication X"),
    (0x2717, "Ballot X"),
    (0x2718, "Heavy ballot X"),
    (0x2705, "White heavy check mark"),
    (0x274C, "Cross mark"),
    (0x2611, "Ballot box with check"),
    (0x2612, "Ballot box with X"),
    (0x26A0, "Warning sign"),
];

const MISC: &[(u32, &str)] = &[
    (0x2600, "Black sun with rays"),
    (0x2601, "Cloud"),
    (0x2602, "Umbrella"),
    (0x2603, "Snowman"),
    (0x260E, "Black telephone"),
    (0x2615, "Hot beverage"),
    (0x261B, "Black right pointing index"),
    (0x263A, "White smiling face"),
    (0x2640, "Female sign"),
    (0x2642, "Male sign"),
    (0x2660, "Black spade suit"),
    (0x2663, "Black club suit"),
    (0x2665, "Black heart suit"),
    (0x2666, "Black diamond suit"),
    (0x266A, "Eighth note"),
    (0x266B, "Beamed eighth notes"),
    (0x269B, "Atom symbol"),
    (0x26A1, "High voltage sign"),
];
