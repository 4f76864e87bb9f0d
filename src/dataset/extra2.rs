//! Extra2 partition: emoji from the supplementary planes — smileys, animals,
//! food, travel, and everyday objects.

use super::{build_category, Category};

pub(super) fn categories() -> Vec<Category> {
    vec![
        build_category("smileys", "Smileys & Emotion", "😀", SMILEYS),
        build_category("animals", "Animals & Nature", "🐾", ANIMALS),
        build_category("food", "Food & Drink", "🍕", FOOD),
        build_category("travel", "Travel & Places", "✈", TRAVEL),
        build_category("objects", "Objects & Tech", "💻", OBJECTS),
    ]
}

const SMILEYS: &[(u32, &str)] = &[
    (0x1F600, "Grinning face"),
    (0x1F601, "Beaming face with smiling eyes"),
    (0x1F602, "Face with tears of joy"),
    (0x1F603, "Grinning face with big eyes"),
    (0x1F604, "Grinning face with smiling eyes"),
    (0x1F605, "Grinning face with sweat"),
    (0x1F609, "Winking face"),
    (0x1F60A, "Smiling face with smiling eyes"),
    (0x1F60D, "Smiling face with heart-eyes"),
    (0x1F60E, "Smiling face with sunglasses"),
    (0x1F610, "Neutral face"),
    (0x1F614, "Pensive face"),
    (0x1F621, "Pouting face"),
    (0x1F622, "Crying face"),
    (0x1F62D, "Loudly crying face"),
    (0x1F631, "Face screaming in fear"),
    (0x1F642, "Slightly smiling face"),
    (0x1F644, "Face with rolling eyes"),
    (0x1F914, "Thinking face"),
    (0x1F97A, "Pleading face"),
];

const ANIMALS: &[(u32, &str)] = &[
    (0x1F415, "Dog"),
    (0x1F408, "Cat"),
    (0x1F42D, "Mouse face"),
    (0x1F430, "Rabbit face"),
    (0x1F98A, "Fox"),
    (0x1F43B, "Bear"),
    (0x1F43C, "Panda"),
    (0x1F428, "Koala"),
    (0x1F981, "Lion"),
    (0x1F42E, "Cow face"),
    (0x1F437, "Pig face"),
    (0x1F438, "Frog"),
    (0x1F419, "Octopus"),
    (0x1F41D, "Honeybee"),
    (0x1F98B, "Butterfly"),
    (0x1F331, "Seedling"),
    (0x1F335, "Cactus"),
    (0x1F33B, "Sunflower"),
    (0x1F341, "Maple leaf"),
];

const FOOD: &[(u32, &str)] = &[
    (0x1F34E, "Red apple"),
    (0x1F34C, "Banana"),
    (0x1F349, "Watermelon"),
    (0x1F353, "Strawberry"),
    (0x1F355, "Pizza"),
    (0x1F354, "Hamburger"),
    (0x1F96A, "Sandwich"),
    (0x1F35C, "Steaming bowl"),
    (0x1F363, "Sushi"),
    (0x1F366, "Soft ice cream"),
    (0x1F370, "Shortcake"),
    (0x1F36B, "Chocolate bar"),
    (0x1F37A, "Beer mug"),
    (0x1F377, "Wine glass"),
    (0x1F964, "Cup with straw"),
];

const TRAVEL: &[(u32, &str)] = &[
    (0x1F697, "Automobile"),
    (0x1F68C, "Bus"),
    (0x1F682, "Locomotive"),
    (0x1F6B2, "Bicycle"),
    (0x2708, "Airplane"),
    (0x1F680, "Rocket"),
    (0x1F6A2, "Ship"),
    (0x1F3E0, "House"),
    (0x1F3D6, "Beach with umbrella"),
    (0x1F5FA, "World map"),
    (0x1F304, "Sunrise over mountains"),
    (0x1F30B, "Volcano"),
];

const OBJECTS: &[(u32, &str)] = &[
    (0x1F4BB, "Laptop"),
    (0x1F4F1, "Mobile phone"),
    (0x2328, "Keyboard"),
    (0x1F5B1, "Computer mouse"),
    (0x1F4BE, "Floppy disk"),
    (0x1F4F7, "Camera"),
    (0x1F50B, "Battery"),
    (0x1F50C, "Electric plug"),
    (0x1F4A1, "Light bulb"),
    (0x1F511, "Key"),
    (0x1F512, "Locked"),
    (0x1F513, "Unlocked"),
    (0x1F527, "Wrench"),
    (0x1F528, "Hammer"),
];
