//! Plain data row types written by output backends.

/// Population split by health state at one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SirRow {
    pub tick:        u64,
    pub susceptible: u64,
    pub infected:    u64,
    pub resistant:   u64,
}

/// One location at one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoRow {
    pub tick:         u64,
    pub location_id:  u32,
    pub name:         String,
    pub kind:         &'static str,
    pub latitude:     f64,
    pub longitude:    f64,
    pub contaminated: bool,
    pub occupants:    u64,
    /// Occupants currently infected.
    pub infected:     u64,
}

/// One history record of one person.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryRow {
    pub person_id:   u32,
    pub tick:        u64,
    pub state:       &'static str,
    pub location_id: u32,
    pub symptomatic: bool,
}

/// One retraced infection.  Hours are `None` when the event never happened.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseRow {
    pub person_id:    u32,
    pub age:          &'static str,
    pub infected_at:  Option<u64>,
    pub symptoms_at:  Option<u64>,
    pub recovered_at: Option<u64>,
    pub home:         String,
    pub work:         Option<String>,
    /// Restaurants visited while susceptible, `;`-separated in visit order.
    pub restaurants:  String,
}
