//! Built-in gendered word lists (lowercase)

/// Words associated with the male category
pub const MALE_WORDS: &[&str] = &[
    "guy", "spokesman", "chairman", "men's", "men", "him", "he's", "his", "boy", "boyfriend",
    "boyfriends", "boys", "brother", "brothers", "dad", "dads", "dude", "father", "fathers",
    "fiance", "gentleman", "gentlemen", "god", "grandfather", "grandpa", "grandson", "groom",
    "he", "himself", "husband", "husbands", "king", "male", "man", "mr", "nephew", "nephews",
    "priest", "prince", "son", "sons", "uncle", "uncles", "waiter", "widower", "widowers",
];

/// Words associated with the female category
pub const FEMALE_WORDS: &[&str] = &[
    "heroine", "spokeswoman", "chairwoman", "women's", "actress", "women", "she's", "her",
    "aunt", "aunts", "bride", "daughter", "daughters", "female", "fiancee", "girl",
    "girlfriend", "girlfriends", "girls", "goddess", "granddaughter", "grandma", "grandmother",
    "herself", "ladies", "lady", "mom", "moms", "mother", "mothers", "mrs", "ms", "niece",
    "nieces", "priestess", "princess", "queens", "she", "sister", "sisters", "waitress", "widow",
    "widows", "wife", "wives", "woman",
];
