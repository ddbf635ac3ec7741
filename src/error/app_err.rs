use crate::error::args::ArgVal;
use std::error::Error;
use std::{collections::BTreeMap, fmt, io, sync::Arc};

#[derive(Debug, Clone)]
pub struct AppErr {
    pub key: &'static str,
    pub args: BTreeMap<&'static str, ArgVal>,
    pub causes: Vec<Cause>,
}

#[derive(Debug, Clone)]
pub enum Cause {
    App(AppErr),
    Std(Arc<dyn Error + Send + Sync>),
}

pub type AppResult<T> = Result<T, AppErr>;

impl AppErr {
    /// Обернуть существующую ошибку контекстом (ключом), вложив её как причину.
    #[inline]
    pub fn ctx(self, key: &'static str) -> AppErr {
        AppErr::new(key).push_app(self)
    }

    #[inline]
    pub fn new(key: &'static str) -> Self {
        Self { key, args: BTreeMap::new(), causes: Vec::new() }
    }

    #[inline]
    pub fn with_arg(mut self, name: &'static str, val: impl Into<ArgVal>) -> Self {
        self.args.insert(name, val.into());
        self
    }

    #[inline]
    pub fn push_app(mut self, cause: AppErr) -> Self {
        self.causes.push(Cause::App(cause));
        self
    }

    #[inline]
    pub fn push_std(mut self, cause: impl Error + Send + Sync + 'static) -> Self {
        self.causes
            .push(Cause::Std(Arc::new(cause)));
        self
    }
}

impl fmt::Display for AppErr {
    // Быстрая небогатая форма (ключ + перечисление args)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.key)?;
        let mut first = true;
        for (k, v) in &self.args {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{k}={v:?}")?;
        }
        write!(f, ")")
    }
}

impl Error for AppErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.causes
            .iter()
            .find_map(|c| match c {
                Cause::App(e) => Some(e as &dyn Error),
                Cause::Std(e) => Some(e.as_ref()),
            })
    }
}

impl From<io::Error> for AppErr {
    fn from(e: io::Error) -> Self {
        AppErr::new("io-error").push_std(e)
    }
}
