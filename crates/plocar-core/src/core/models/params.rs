use super::header::Header;
use serde::Serialize;

/// The header fields exposed to callers.
///
/// `nlmmax` and the precision code are internal to the decoder and are never part
/// of the bag; the channel count is still visible through the shape of the PLO array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParameterBag {
    pub nion: i32,
    pub ns: i32,
    pub nk: i32,
    pub nb: i32,
    pub nc_flag: i32,
}

impl ParameterBag {
    /// The keys of the bag, in the order [`iter`](Self::iter) yields them.
    pub const KEYS: [&'static str; 5] = ["nion", "ns", "nk", "nb", "nc_flag"];

    pub fn get(&self, key: &str) -> Option<i32> {
        match key {
            "nion" => Some(self.nion),
            "ns" => Some(self.ns),
            "nk" => Some(self.nk),
            "nb" => Some(self.nb),
            "nc_flag" => Some(self.nc_flag),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, i32)> + '_ {
        Self::KEYS
            .into_iter()
            .filter_map(move |key| self.get(key).map(|value| (key, value)))
    }
}

impl From<&Header> for ParameterBag {
    fn from(header: &Header) -> Self {
        Self {
            nion: header.nion,
            ns: header.ns,
            nk: header.nk,
            nb: header.nb,
            nc_flag: header.nc_flag,
        }
    }
}
