/// Station information including location data and identification.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StationInfo {
    /// ICAO identifier, eg KSFO
    ident: Option<String>,
    /// Latitude and longitude in decimal degrees.
    location: (f64, f64),
}

impl StationInfo {
    /// Create a new `StationInfo` object at a location.
    ///
    /// Reports are always requested for a known position, so the latitude and longitude are
    /// required up front. They are carried through decoding untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use turbulence_analysis::StationInfo;
    ///
    /// let stn = StationInfo::new(37.6188, -122.375);
    /// assert_eq!(stn.latitude(), 37.6188);
    /// assert_eq!(stn.longitude(), -122.375);
    /// assert!(stn.ident().is_none());
    /// ```
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        StationInfo {
            ident: None,
            location: (latitude, longitude),
        }
    }

    /// Builder method to add an ICAO identifier.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use turbulence_analysis::StationInfo;
    ///
    /// let stn = StationInfo::new(37.6188, -122.375).with_ident("KSFO".to_owned());
    /// assert_eq!(stn.ident().unwrap(), "KSFO");
    ///
    /// let stn = stn.with_ident(None);
    /// assert!(stn.ident().is_none());
    /// ```
    #[inline]
    pub fn with_ident<T>(mut self, ident: T) -> Self
    where
        Option<String>: From<T>,
    {
        self.ident = Option::from(ident);
        self
    }

    /// ICAO identifier, eg KSFO
    #[inline]
    pub fn ident(&self) -> Option<&str> {
        self.ident.as_ref().map(|s| s.as_ref())
    }

    /// Latitude in decimal degrees.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.location.0
    }

    /// Longitude in decimal degrees.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.location.1
    }

    /// Latitude and longitude.
    #[inline]
    pub fn location(&self) -> (f64, f64) {
        self.location
    }
}
