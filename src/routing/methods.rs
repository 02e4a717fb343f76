use http::Method;

/// The HTTP verbs that are listed, everything else is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizedMethods(Vec<Method>);

impl RecognizedMethods {
    pub fn new(methods: Vec<Method>) -> Self {
        let mut unique: Vec<Method> = Vec::with_capacity(methods.len());
        for method in methods {
            if !unique.contains(&method) {
                unique.push(method);
            }
        }
        RecognizedMethods(unique)
    }

    /// Parse method names exactly as given; `"get"` is not `GET`.
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self, String> {
        let mut methods = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let method = Method::from_bytes(name.as_bytes())
                .map_err(|_| format!("'{}' is not a valid HTTP method", name))?;
            methods.push(method);
        }
        Ok(Self::new(methods))
    }

    /// Look up a method string of a route, returning the matching verb.
    pub fn recognize(&self, name: &str) -> Option<&Method> {
        self.0.iter().find(|method| method.as_str() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.recognize(name).is_some()
    }

    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(|method| method.to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for RecognizedMethods {
    fn default() -> Self {
        RecognizedMethods(vec![
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::PUT,
            Method::PATCH,
        ])
    }
}
