use {
    crate::{AngleKey, PoseError, PoseTemplate, ToleranceRange},
    std::{
        fs,
        io::ErrorKind,
        path::Path,
        sync::{Arc, RwLock},
    },
    toml::{Table, Value},
};

/// Pose templates by name, in insertion order.
///
/// Entries are shared `Arc`s and only ever replaced whole, so a caller holding
/// a template keeps a consistent view while the store moves on.
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    entries: Vec<Arc<PoseTemplate>>,
}

impl TemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<Arc<PoseTemplate>> {
        self.position(name).map(|i| Arc::clone(&self.entries[i]))
    }

    /// Pose names in store order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|t| t.name())
    }

    pub fn templates(&self) -> impl Iterator<Item = &Arc<PoseTemplate>> {
        self.entries.iter()
    }

    /// Insert `template`, swapping out any entry of the same name in place.
    /// Returns the previous entry.
    pub fn replace(&mut self, template: PoseTemplate) -> Option<Arc<PoseTemplate>> {
        let template = Arc::new(template);
        match self.position(template.name()) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i], template)),
            None => {
                self.entries.push(template);
                None
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Arc<PoseTemplate>> {
        self.position(name).map(|i| self.entries.remove(i))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|t| t.name() == name)
    }

    /// Read a store from disk. A missing file is an empty store.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PoseError> {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::warn!("template file {} not found, starting with no poses", path.display());
                return Ok(Self::new());
            }
            Err(err) => return Err(err.into()),
        };
        let store = match Self::from_toml_str(&text) {
            Ok(store) => store,
            Err(err) => match legacy_ini_table(&text) {
                Some(document) => {
                    log::warn!(
                        "{} is not TOML, reading it as a legacy INI pose file",
                        path.display()
                    );
                    Self::from_table(&document)
                }
                None => return Err(err),
            },
        };
        log::info!("loaded {} pose templates from {}", store.len(), path.display());
        Ok(store)
    }

    /// Write the whole store to `path` through a temporary sibling and a rename.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PoseError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "templates".to_string());
        let staging = path.with_file_name(format!(".{}.tmp", file_name));
        fs::write(&staging, self.to_toml_string()?)?;
        fs::rename(&staging, path)?;
        log::info!("saved {} pose templates to {}", self.len(), path.display());
        Ok(())
    }

    /// Parse the persisted form: one table per pose with `{key}_min` / `{key}_max` fields.
    ///
    /// Only TOML syntax errors fail. Bad fields are skipped with a warning and the
    /// affected joint keeps the permissive range.
    pub fn from_toml_str(text: &str) -> Result<Self, PoseError> {
        let document: Table = text.parse()?;
        Ok(Self::from_table(&document))
    }

    fn from_table(document: &Table) -> Self {
        let mut store = Self::new();
        for (name, section) in document {
            match section.as_table() {
                Some(fields) => {
                    store.replace(parse_template(name, fields));
                }
                None => log::warn!("ignoring top-level value '{}': not a pose table", name),
            }
        }
        store
    }

    pub fn to_toml_string(&self) -> Result<String, PoseError> {
        let mut document = Table::new();
        for template in &self.entries {
            let mut fields = Table::new();
            for (key, range) in template.explicit_ranges() {
                fields.insert(format!("{}_min", key), Value::Float(range.min()));
                fields.insert(format!("{}_max", key), Value::Float(range.max()));
            }
            document.insert(template.name().to_string(), Value::Table(fields));
        }
        Ok(toml::to_string(&document)?)
    }
}

/// Sections of an INI pose file as written by the earlier tool: `[Pose Name]`
/// headers over `key = value` or `key: value` lines, every value kept as text.
///
/// `None` when a line fits neither form, so the TOML error is reported instead.
fn legacy_ini_table(text: &str) -> Option<Table> {
    let mut document = Table::new();
    let mut current: Option<String> = None;
    for line in text.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            let name = name.trim().to_string();
            if name != "DEFAULT" {
                document.entry(name.clone()).or_insert(Value::Table(Table::new()));
            }
            current = Some(name);
            continue;
        }
        let split = line.find(['=', ':'])?;
        let (key, value) = (line[..split].trim(), line[split + 1..].trim());
        let section = current.as_ref()?;
        if section == "DEFAULT" {
            continue;
        }
        if let Some(Value::Table(fields)) = document.get_mut(section) {
            fields.insert(key.to_lowercase(), Value::String(value.to_string()));
        }
    }
    Some(document)
}

enum Bound {
    Min,
    Max,
}

fn parse_field_name(field: &str) -> Option<(AngleKey, Bound)> {
    if let Some(key) = field.strip_suffix("_min") {
        return key.parse().ok().map(|key| (key, Bound::Min));
    }
    if let Some(key) = field.strip_suffix("_max") {
        return key.parse().ok().map(|key| (key, Bound::Max));
    }
    None
}

// legacy writers stored numbers as text
fn parse_degrees(value: &Value) -> Option<f64> {
    match value {
        Value::Float(f) => Some(*f),
        Value::Integer(i) => Some(*i as f64),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn parse_template(name: &str, fields: &Table) -> PoseTemplate {
    let mut bounds: [(Option<f64>, Option<f64>); crate::ANGLE_KEY_COUNT] = Default::default();

    for (field, value) in fields {
        let Some((key, bound)) = parse_field_name(field) else {
            log::warn!("pose '{}': ignoring unknown field '{}'", name, field);
            continue;
        };
        let Some(degrees) = parse_degrees(value) else {
            log::warn!("pose '{}': field '{}' is not a number, using default", name, field);
            continue;
        };
        let slot = &mut bounds[key.index()];
        match bound {
            Bound::Min => slot.0 = Some(degrees),
            Bound::Max => slot.1 = Some(degrees),
        }
    }

    let mut template = PoseTemplate::new(name);
    for key in AngleKey::ALL {
        let (min, max) = bounds[key.index()];
        if min.is_none() && max.is_none() {
            continue;
        }
        let min = min.unwrap_or(ToleranceRange::PERMISSIVE.min());
        let max = max.unwrap_or(ToleranceRange::PERMISSIVE.max());
        match ToleranceRange::new(min, max) {
            Some(range) => template.set_range(key, range),
            None => log::warn!(
                "pose '{}': {} range [{}, {}] is invalid, using default",
                name,
                key,
                min,
                max
            ),
        }
    }
    template
}

/// A [`TemplateStore`] shared between live matching and calibration.
///
/// Readers clone out an `Arc<PoseTemplate>` and release the lock before matching;
/// writers publish whole templates, so a match sees either the old or the new one.
#[derive(Debug, Default)]
pub struct SharedTemplateStore {
    inner: RwLock<TemplateStore>,
}

impl SharedTemplateStore {
    pub fn new(store: TemplateStore) -> Self {
        Self {
            inner: RwLock::new(store),
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<PoseTemplate>> {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).get(name)
    }

    /// Copy of the current store. Templates are shared, not cloned.
    pub fn snapshot(&self) -> TemplateStore {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn publish(&self, template: PoseTemplate) -> Option<Arc<PoseTemplate>> {
        self.inner
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .replace(template)
    }

    /// Swap in a freshly loaded store.
    pub fn reload(&self, store: TemplateStore) {
        *self.inner.write().unwrap_or_else(|e| e.into_inner()) = store;
    }
}
