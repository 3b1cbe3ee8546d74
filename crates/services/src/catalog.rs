use rand::seq::SliceRandom;

use rostire_core::model::WordCategory;

/// The static word-list catalog: category names mapped to their authored
/// word lists, in insertion order.
///
/// The built-in catalog ships eight Romanian practice categories; callers can
/// also assemble their own for tests or custom exercises.
#[derive(Debug, Clone, Default)]
pub struct WordCatalog {
    categories: Vec<WordCategory>,
}

impl WordCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with the built-in Romanian practice categories.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for category in builtin_categories() {
            catalog.insert(category);
        }
        catalog
    }

    /// Adds a category, replacing any existing category with the same name.
    pub fn insert(&mut self, category: WordCategory) {
        if let Some(existing) = self
            .categories
            .iter_mut()
            .find(|c| c.name() == category.name())
        {
            *existing = category;
        } else {
            self.categories.push(category);
        }
    }

    /// Removes a category by name. Returns true if it existed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.categories.len();
        self.categories.retain(|c| c.name().as_str() != name);
        self.categories.len() != before
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&WordCategory> {
        self.categories.iter().find(|c| c.name().as_str() == name)
    }

    /// Category names in insertion order.
    #[must_use]
    pub fn category_names(&self) -> Vec<String> {
        self.categories
            .iter()
            .map(|c| c.name().as_str().to_string())
            .collect()
    }

    /// A freshly shuffled copy of the category's words, or `None` when the
    /// category does not exist. Each call shuffles anew.
    #[must_use]
    pub fn shuffled_words(&self, name: &str) -> Option<Vec<String>> {
        let category = self.get(name)?;
        let mut words = category.words().to_vec();
        words.shuffle(&mut rand::rng());
        Some(words)
    }
}

fn builtin_categories() -> Vec<WordCategory> {
    let data: [(&str, &[&str]); 8] = [
        (
            "Animale",
            &[
                "pisică", "câine", "cal", "vacă", "porc", "oaie", "capră", "iepure", "găină",
                "rață", "gâscă", "leu", "tigru", "elefant", "maimuță", "urs", "vulpe", "lup",
                "șoarece", "pasăre",
            ],
        ),
        (
            "Obiecte Casă",
            &[
                "masă",
                "scaun",
                "pat",
                "dulap",
                "televizor",
                "frigider",
                "cuptor",
                "fereastră",
                "ușă",
                "oglindă",
                "canapea",
                "fotoliu",
                "lampă",
                "ceas",
                "carte",
                "pahar",
                "farfurie",
                "lingură",
                "furculiță",
                "cuțit",
            ],
        ),
        (
            "Corpul Uman",
            &[
                "cap",
                "față",
                "ochi",
                "nas",
                "gură",
                "ureche",
                "păr",
                "gât",
                "umăr",
                "braț",
                "mână",
                "deget",
                "piept",
                "spate",
                "picior",
                "genunchi",
                "picior",
                "deget de la picior",
                "inimă",
                "stomac",
            ],
        ),
        (
            "Mâncare",
            &[
                "pâine",
                "lapte",
                "apă",
                "mere",
                "banane",
                "portocale",
                "roșii",
                "cartofi",
                "ceapă",
                "morcovi",
                "salată",
                "carne",
                "pește",
                "ou",
                "brânză",
                "unt",
                "zahăr",
                "sare",
                "orez",
                "paste",
            ],
        ),
        (
            "Culori",
            &[
                "roșu",
                "albastru",
                "verde",
                "galben",
                "negru",
                "alb",
                "portocaliu",
                "violet",
                "roz",
                "maro",
                "gri",
                "turcoaz",
            ],
        ),
        (
            "Familie",
            &[
                "mamă",
                "tată",
                "fiu",
                "fiică",
                "bunic",
                "bunică",
                "frate",
                "soră",
                "unchi",
                "mătușă",
                "verișor",
                "verișoară",
                "soț",
                "soție",
                "copil",
                "bebeluș",
                "nepot",
                "nepoată",
            ],
        ),
        (
            "Numere",
            &[
                "unu",
                "doi",
                "trei",
                "patru",
                "cinci",
                "șase",
                "șapte",
                "opt",
                "nouă",
                "zece",
                "unsprezece",
                "doisprezece",
            ],
        ),
        (
            "Verbe Simple",
            &[
                "merg", "vin", "mănânc", "beau", "dorm", "vorbesc", "citesc", "scriu", "ascult",
                "privesc", "iau", "dau",
            ],
        ),
    ];

    data.into_iter()
        .map(|(name, words)| {
            WordCategory::new(name, words.iter().copied()).expect("built-in category is valid")
        })
        .collect()
}
