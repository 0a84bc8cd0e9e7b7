// ─────────────────────────────────────────────────────────────────────────────
// Unit heuristic keywords (lower case, English + French)
// ─────────────────────────────────────────────────────────────────────────────

pub const EGG_KEYWORDS: &[&str] = &["egg", "oeuf", "œuf"];

pub const LIQUID_KEYWORDS: &[&str] = &[
    "milk", "lait", "juice", "jus", "water", "eau", "drink", "boisson", "shake", "smoothie",
    "coffee", "café", "tea", "thé",
];

pub const WHOLE_FRUIT_KEYWORDS: &[&str] =
    &["apple", "pomme", "orange", "banana", "banane", "pear", "poire"];

pub const BREAD_KEYWORDS: &[&str] = &["bread", "pain", "toast", "slice"];

pub const PASTA_RICE_KEYWORDS: &[&str] = &["pasta", "pâtes", "rice", "riz", "noodle", "nouille"];

/// Distinguishes cooked from raw portions of pasta and rice.
pub const COOKED_KEYWORDS: &[&str] = &["cooked", "cuit"];

pub const MEAT_FISH_KEYWORDS: &[&str] = &[
    "chicken", "poulet", "beef", "boeuf", "pork", "porc", "fish", "poisson", "salmon", "saumon",
    "tuna", "thon",
];

pub const YOGURT_KEYWORDS: &[&str] = &["yogurt", "yoghurt", "yaourt"];

// ─────────────────────────────────────────────────────────────────────────────
// Heuristic serving weights (grams per unit)
// ─────────────────────────────────────────────────────────────────────────────

/// Average shelled egg.
pub const EGG_PIECE_GRAMS: f64 = 50.0;

pub const LITER_GRAMS: f64 = 1000.0;

pub const GLASS_GRAMS: f64 = 250.0;

pub const FRUIT_PIECE_GRAMS: f64 = 150.0;

pub const BREAD_SLICE_GRAMS: f64 = 30.0;

pub const COOKED_PORTION_GRAMS: f64 = 200.0;

pub const RAW_PORTION_GRAMS: f64 = 80.0;

pub const MEAT_PORTION_GRAMS: f64 = 150.0;

pub const YOGURT_POT_GRAMS: f64 = 125.0;

// ─────────────────────────────────────────────────────────────────────────────
// Unit codes
// ─────────────────────────────────────────────────────────────────────────────

pub const UNIT_GRAM: &str = "g";
pub const UNIT_MILLILITER: &str = "ml";
pub const UNIT_LITER: &str = "L";
pub const UNIT_GLASS: &str = "glass";
pub const UNIT_PIECE: &str = "piece";
pub const UNIT_SLICE: &str = "slice";
pub const UNIT_PORTION: &str = "portion";
pub const UNIT_POT: &str = "pot";

/// Units counted in whole servings; the quantity picker offers 1 to 4.
pub const COUNT_LIKE_UNITS: &[&str] = &[UNIT_PIECE, UNIT_PORTION, UNIT_GLASS, UNIT_POT, UNIT_SLICE];

pub const QUICK_QUANTITIES_COUNT: &[f64] = &[1.0, 2.0, 3.0, 4.0];
pub const QUICK_QUANTITIES_GRAMS: &[f64] = &[50.0, 100.0, 150.0, 200.0, 250.0];
pub const QUICK_QUANTITIES_ML: &[f64] = &[100.0, 200.0, 250.0, 500.0];
pub const QUICK_QUANTITIES_LITERS: &[f64] = &[0.25, 0.5, 1.0, 1.5];

// ─────────────────────────────────────────────────────────────────────────────
// Calorie goals
// ─────────────────────────────────────────────────────────────────────────────

/// Goals used until a profile has been entered.
pub const DEFAULT_DAILY_CALORIES: u32 = 3000;
pub const DEFAULT_PROTEIN_GOAL: u32 = 180;
pub const DEFAULT_CARBS_GOAL: u32 = 350;
pub const DEFAULT_FAT_GOAL: u32 = 80;

/// Share of calories per macro.
pub const PROTEIN_CALORIE_SHARE: f64 = 0.30;
pub const CARBS_CALORIE_SHARE: f64 = 0.45;
pub const FAT_CALORIE_SHARE: f64 = 0.25;

/// Energy density in kcal per gram.
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

pub const LOSE_WEIGHT_DEFICIT: f64 = 500.0;
pub const GAIN_WEIGHT_SURPLUS: f64 = 300.0;

/// Target weight offsets in kg.
pub const LOSE_TARGET_OFFSET_KG: f64 = -5.0;
pub const GAIN_TARGET_OFFSET_KG: f64 = 3.0;
