/// The owned-item counts of the session
///
/// Counts of present entries are always at least one; removing the last
/// unit of an item deletes its entry. Iteration follows the order in which
/// items were first bought.
#[derive(Debug, Default)]
pub struct Basket {
    items: Vec<(String, u32)>,
}

impl Basket {
    /// Creates a new, empty basket
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of the specified item
    ///
    /// Creates the entry at count one if the item is not yet owned.
    pub fn add(&mut self, name: &str) {
        match self.items.iter_mut().find(|(item, _)| item == name) {
            Some((_, count)) => *count += 1,
            None => self.items.push((name.to_owned(), 1)),
        }
    }

    /// Removes one unit of the specified item
    ///
    /// Returns `false` without any change if the item is not owned.
    /// Removing the last unit deletes the entry.
    pub fn remove(&mut self, name: &str) -> bool {
        let Some(position) = self.items.iter().position(|(item, _)| item == name) else {
            return false;
        };

        let (_, count) = &mut self.items[position];
        if *count > 1 {
            *count -= 1;
        } else {
            self.items.remove(position);
        }

        true
    }

    /// The owned count of the specified item, zero if not owned
    pub fn count(&self, name: &str) -> u32 {
        self.items
            .iter()
            .find(|(item, _)| item == name)
            .map(|&(_, count)| count)
            .unwrap_or(0)
    }

    /// All owned items with their counts, in first-bought order
    pub fn items(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items.iter().map(|(item, count)| (item.as_str(), *count))
    }

    /// Whether nothing has been bought yet
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
