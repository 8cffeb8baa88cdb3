/// Builds canonical URIs for city resources
#[derive(Debug, Clone)]
pub struct ResourceLinks {
    public_base_url: String,
    cities_path: String,
}

impl ResourceLinks {
    /// `public_base_url` is the externally visible origin ("https://api.example.com"),
    /// `cities_path` the mount point of the collection ("/cities").
    pub fn new(public_base_url: impl Into<String>, cities_path: impl Into<String>) -> Self {
        Self {
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
            cities_path: cities_path.into(),
        }
    }

    pub fn cities_path(&self) -> &str {
        &self.cities_path
    }

    /// URI of the API root
    pub fn root(&self) -> String {
        format!("{}/", self.public_base_url)
    }

    /// URI of the cities collection
    pub fn cities(&self) -> String {
        format!("{}{}", self.public_base_url, self.cities_path)
    }

    /// URI of a single city; the id is percent-encoded as one path segment
    pub fn city(&self, id: &str) -> String {
        format!("{}/{}", self.cities(), urlencoding::encode(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_uri() {
        let links = ResourceLinks::new("http://localhost:3000", "/cities");

        assert_eq!(links.root(), "http://localhost:3000/");
        assert_eq!(links.cities(), "http://localhost:3000/cities");
        assert_eq!(links.city("berlin"), "http://localhost:3000/cities/berlin");
    }

    #[test]
    fn test_trailing_slash_on_base_url_is_ignored() {
        let links = ResourceLinks::new("https://api.example.com/", "/v1/cities");

        assert_eq!(links.city("paris"), "https://api.example.com/v1/cities/paris");
    }

    #[test]
    fn test_id_is_encoded_as_single_segment() {
        let links = ResourceLinks::new("http://localhost", "/cities");

        assert_eq!(
            links.city("new york/ny"),
            "http://localhost/cities/new%20york%2Fny"
        );
        assert_eq!(links.city("münchen"), "http://localhost/cities/m%C3%BCnchen");
    }
}
