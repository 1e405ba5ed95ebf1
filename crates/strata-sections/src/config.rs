use serde::Deserialize;

// Top-level sections config file; sections are listed from the top of the stack down
#[derive(Deserialize, Debug, Default, Clone)]
pub struct SectionsConfig {
    #[serde(default, rename = "section")]
    pub sections: Vec<SectionDef>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SectionDef {
    pub name: String,
    pub min_y: i32,
    pub max_y: i32,
    // [min_x, min_z, max_x, max_z], inclusive
    #[serde(default)]
    pub footprint: Option<[i32; 4]>,
    // Link to the section declared directly before this one
    #[serde(default)]
    pub link: Option<LinkDef>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct LinkDef {
    // upper_y = lower_y + y_offset
    #[serde(default)]
    pub y_offset: Option<i32>,
    // Number of shared layers: top of this section <-> bottom of the one above
    #[serde(default)]
    pub overlap: Option<i32>,
}
