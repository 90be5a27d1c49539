use std::fs;

pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

// Prefix matches land in a high band, substring-only matches in a low band;
// subtracting the entry length prefers the more precise (shorter) match.
const PREFIX_SCORE: i64 = 100;
const SUBSTRING_SCORE: i64 = 10;

const EUROPEAN_DESTINATIONS: &[&str] = &[
    // France
    "Paris, France", "Nice, France", "Lyon, France", "Marseille, France",
    "Bordeaux, France", "Strasbourg, France", "Toulouse, France",
    "Provence, France", "French Riviera, France", "Normandy, France",
    "Loire Valley, France", "Mont Saint-Michel, France",
    // Italy
    "Rome, Italy", "Venice, Italy", "Florence, Italy", "Milan, Italy",
    "Naples, Italy", "Turin, Italy", "Bologna, Italy", "Verona, Italy",
    "Pisa, Italy", "Siena, Italy", "Cinque Terre, Italy",
    "Amalfi Coast, Italy", "Sicily, Italy", "Sardinia, Italy",
    "Lake Como, Italy", "Tuscany, Italy", "Pompeii, Italy", "Capri, Italy",
    // Spain
    "Barcelona, Spain", "Madrid, Spain", "Seville, Spain", "Valencia, Spain",
    "Granada, Spain", "Bilbao, Spain", "Malaga, Spain", "Toledo, Spain",
    "Cordoba, Spain", "San Sebastian, Spain", "Ibiza, Spain",
    "Mallorca, Spain", "Costa del Sol, Spain", "Basque Country, Spain",
    // Greece
    "Athens, Greece", "Santorini, Greece", "Mykonos, Greece", "Crete, Greece",
    "Rhodes, Greece", "Corfu, Greece", "Thessaloniki, Greece",
    "Delphi, Greece", "Meteora, Greece",
    // United Kingdom
    "London, England", "Edinburgh, Scotland", "Glasgow, Scotland",
    "Manchester, England", "Liverpool, England", "Oxford, England",
    "Cambridge, England", "Bath, England", "York, England",
    "Cotswolds, England", "Lake District, England", "Cardiff, Wales",
    "Belfast, Northern Ireland", "Stonehenge, England",
    // Netherlands
    "Amsterdam, Netherlands", "Rotterdam, Netherlands",
    "The Hague, Netherlands", "Utrecht, Netherlands", "Delft, Netherlands",
    "Haarlem, Netherlands",
    // Germany
    "Berlin, Germany", "Munich, Germany", "Hamburg, Germany",
    "Frankfurt, Germany", "Cologne, Germany", "Dresden, Germany",
    "Heidelberg, Germany", "Rothenburg, Germany", "Black Forest, Germany",
    "Bavaria, Germany", "Rhine Valley, Germany",
    // Portugal
    "Lisbon, Portugal", "Porto, Portugal", "Algarve, Portugal",
    "Sintra, Portugal", "Madeira, Portugal", "Azores, Portugal",
    "Evora, Portugal",
    // Austria
    "Vienna, Austria", "Salzburg, Austria", "Innsbruck, Austria",
    "Hallstatt, Austria",
    // Switzerland
    "Zurich, Switzerland", "Geneva, Switzerland", "Lucerne, Switzerland",
    "Interlaken, Switzerland", "Zermatt, Switzerland", "Bern, Switzerland",
    "Swiss Alps, Switzerland",
    // Czech Republic
    "Prague, Czech Republic", "Cesky Krumlov, Czech Republic",
    // Belgium
    "Brussels, Belgium", "Bruges, Belgium", "Ghent, Belgium",
    "Antwerp, Belgium",
    // Croatia
    "Dubrovnik, Croatia", "Split, Croatia", "Zagreb, Croatia",
    "Hvar, Croatia", "Plitvice Lakes, Croatia",
    // Poland
    "Krakow, Poland", "Warsaw, Poland", "Gdansk, Poland", "Wroclaw, Poland",
    // Ireland
    "Dublin, Ireland", "Galway, Ireland", "Cork, Ireland",
    "Cliffs of Moher, Ireland", "Ring of Kerry, Ireland",
    // Hungary
    "Budapest, Hungary",
    // Denmark
    "Copenhagen, Denmark",
    // Norway
    "Oslo, Norway", "Bergen, Norway", "Norwegian Fjords, Norway",
    "Tromso, Norway",
    // Sweden
    "Stockholm, Sweden", "Gothenburg, Sweden",
    // Iceland
    "Reykjavik, Iceland", "Blue Lagoon, Iceland", "Golden Circle, Iceland",
    // Turkey
    "Istanbul, Turkey", "Cappadocia, Turkey", "Ephesus, Turkey",
];

/// The static set of known destination names, loaded once at startup and
/// read-only afterwards. Used only by the suggestion ranking below.
pub struct DestinationCatalog {
    entries: Vec<String>,
}

impl Default for DestinationCatalog {
    fn default() -> Self {
        Self::built_in()
    }
}

impl DestinationCatalog {
    pub fn built_in() -> Self {
        Self {
            entries: EUROPEAN_DESTINATIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Load the catalog from a JSON array of strings.
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let raw = fs::read_to_string(path)?;
        let entries: Vec<String> = serde_json::from_str(&raw)?;
        Ok(Self { entries })
    }

    /// Load from the configured path when one is set, falling back to the
    /// built-in list when the file is missing or malformed.
    pub fn load(path: Option<&str>) -> Self {
        match path {
            Some(path) => match Self::from_file(path) {
                Ok(catalog) => {
                    println!("Loaded {} destinations from {}", catalog.len(), path);
                    catalog
                }
                Err(e) => {
                    eprintln!(
                        "Failed to load destination catalog from {}: {}. Using built-in list.",
                        path, e
                    );
                    Self::built_in()
                }
            },
            None => Self::built_in(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rank catalog entries against a partial query, best match first.
    ///
    /// Case-insensitive. Entries whose lowercase form starts with the query
    /// outrank entries that merely contain it; everything else is excluded.
    /// Within a band, shorter entries rank higher, and remaining ties break
    /// lexicographically so the ordering is fully deterministic. An empty
    /// query yields an empty list, never an error.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<String> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut scored: Vec<(i64, &str)> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let haystack = entry.to_lowercase();
                let base = if haystack.starts_with(&needle) {
                    PREFIX_SCORE
                } else if haystack.contains(&needle) {
                    SUBSTRING_SCORE
                } else {
                    return None;
                };
                Some((base - entry.chars().count() as i64, entry.as_str()))
            })
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, entry)| entry.to_string())
            .collect()
    }
}
