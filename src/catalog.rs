use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::Path;

/// A single sellable item of the inventory
///
/// Entries are read once at startup from the inventory file and are
/// immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct CatalogEntry {
    name: String,
    price: u32,
    external_ref: String,
}

impl CatalogEntry {
    /// The unique name of the item
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The price of the item in whole dollars
    pub fn price(&self) -> u32 {
        self.price
    }

    /// The opaque product reference used to build the product URL
    pub fn external_ref(&self) -> &str {
        &self.external_ref
    }

    /// The product page URL for this item
    pub fn product_url(&self) -> String {
        format!("https://www.amazon.com/dp/{}", self.external_ref)
    }
}

/// The read-only item table loaded from the inventory file
///
/// Lookup is by exact name; iteration follows the order in which items
/// first appeared in the source file.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Loads the catalog from the inventory file at `path`
    ///
    /// Returns an error only when the file cannot be opened. Callers are
    /// expected to report that and continue with an empty catalog.
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader(file))
    }

    /// Reads headerless `name,price,external_ref` rows
    ///
    /// Rows that do not parse into an entry are skipped: that covers rows
    /// with a field count other than three as well as rows whose price
    /// field is not a non-negative integer. A later row with an already
    /// known name replaces the earlier entry without changing its position.
    pub fn from_reader(reader: impl io::Read) -> Self {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut catalog = Self::default();
        for record in rdr.records().flatten() {
            if record.len() != 3 {
                continue;
            }
            if let Ok(entry) = record.deserialize::<CatalogEntry>(None) {
                catalog.insert(entry);
            }
        }

        catalog
    }

    fn insert(&mut self, entry: CatalogEntry) {
        match self.index.get(entry.name()) {
            Some(&position) => self.entries[position] = entry,
            None => {
                self.index.insert(entry.name().to_owned(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Looks up an item by its exact name
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.index.get(name).map(|&position| &self.entries[position])
    }

    /// All items, in source-file order
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// The number of items in the catalog
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no items at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
