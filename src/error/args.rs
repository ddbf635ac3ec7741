use std::{fmt, fmt::Display, sync::Arc};

#[derive(Clone)]
pub enum ArgVal {
    Str(Arc<str>),
    Int(i64),
    Bool(bool),
    Display(Arc<dyn Display + Send + Sync>),
}

impl From<String> for ArgVal {
    #[inline]
    fn from(s: String) -> Self {
        ArgVal::Str(Arc::<str>::from(s))
    }
}

impl From<&String> for ArgVal {
    #[inline]
    fn from(s: &String) -> Self {
        ArgVal::Str(Arc::<str>::from(s.as_str()))
    }
}

impl From<&str> for ArgVal {
    #[inline]
    fn from(s: &str) -> Self {
        ArgVal::Str(Arc::<str>::from(s))
    }
}

impl From<bool> for ArgVal {
    fn from(v: bool) -> Self {
        ArgVal::Bool(v)
    }
}

impl From<u32> for ArgVal {
    fn from(v: u32) -> Self {
        ArgVal::Int(v as i64)
    }
}

impl From<u64> for ArgVal {
    fn from(v: u64) -> Self {
        ArgVal::Int(v as i64)
    }
}

impl From<usize> for ArgVal {
    fn from(v: usize) -> Self {
        ArgVal::Int(v as i64)
    }
}

// Debug by hand (dyn Display is not Debug)
impl fmt::Debug for ArgVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgVal::Str(s) => f.debug_tuple("Str").field(&s).finish(),
            ArgVal::Int(i) => f.debug_tuple("Int").field(i).finish(),
            ArgVal::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            ArgVal::Display(d) => {
                let s = format!("{d}");
                f.debug_tuple("Display")
                    .field(&s)
                    .finish()
            }
        }
    }
}

impl ArgVal {
    #[inline]
    pub fn from_display<T: Display + Send + Sync + 'static>(t: T) -> Self {
        ArgVal::Display(Arc::new(t))
    }
}
