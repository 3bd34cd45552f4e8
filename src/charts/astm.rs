use super::Chart;
use crate::{
    builder::DocumentBuilder,
    table::{Align, Column, ReferenceTable, TableRenderer, TableStyle},
    ChartError,
};

pub const ASTM_COLUMNS: [Column; 3] = [
    Column::new("Standard", 64.0, Align::Left),
    Column::new("Title", 330.0, Align::Left),
    Column::new("Topic", 120.0, Align::Left),
];

#[rustfmt::skip]
pub const ASTM_STANDARDS: [[&str; 3]; 23] = [
    ["E3", "Standard Guide for Preparation of Metallographic Specimens", "Preparation"],
    ["E7", "Standard Terminology Relating to Metallography", "Terminology"],
    ["E10", "Standard Test Method for Brinell Hardness of Metallic Materials", "Hardness"],
    ["E18", "Standard Test Methods for Rockwell Hardness of Metallic Materials", "Hardness"],
    ["E45", "Standard Test Methods for Determining the Inclusion Content of Steel", "Inclusions"],
    ["E92", "Standard Test Methods for Vickers Hardness and Knoop Hardness of Metallic Materials", "Hardness"],
    ["E112", "Standard Test Methods for Determining Average Grain Size", "Grain size"],
    ["E140", "Standard Hardness Conversion Tables for Metals", "Hardness"],
    ["E340", "Standard Practice for Macroetching Metals and Alloys", "Etching"],
    ["E381", "Standard Method of Macroetch Testing Steel Bars, Billets, Blooms, and Forgings", "Etching"],
    ["E384", "Standard Test Method for Microindentation Hardness of Materials", "Hardness"],
    ["E407", "Standard Practice for Microetching Metals and Alloys", "Etching"],
    ["E562", "Standard Test Method for Determining Volume Fraction by Systematic Manual Point Count", "Quantitative"],
    ["E768", "Standard Guide for Preparing and Evaluating Specimens for Automatic Inclusion Assessment of Steel", "Inclusions"],
    ["E883", "Standard Guide for Reflected-Light Photomicrography", "Imaging"],
    ["E930", "Standard Test Methods for Estimating the Largest Grain Observed in a Metallographic Section (ALA Grain Size)", "Grain size"],
    ["E975", "Standard Practice for X-Ray Determination of Retained Austenite in Steel with Near Random Crystallographic Orientation", "Phase analysis"],
    ["E1077", "Standard Test Methods for Estimating the Depth of Decarburization of Steel Specimens", "Surface"],
    ["E1181", "Standard Test Methods for Characterizing Duplex Grain Sizes", "Grain size"],
    ["E1245", "Standard Practice for Determining the Inclusion or Second-Phase Constituent Content of Metals by Automatic Image Analysis", "Quantitative"],
    ["E1382", "Standard Test Methods for Determining Average Grain Size Using Semiautomatic and Automatic Image Analysis", "Grain size"],
    ["E1558", "Standard Guide for Electrolytic Polishing of Metallographic Specimens", "Preparation"],
    ["E2627", "Standard Practice for Determining Average Grain Size Using Electron Backscatter Diffraction (EBSD) in Fully Recrystallized Polycrystalline Materials", "Grain size"],
];

/// The ASTM E-series standards most often cited in metallography
pub struct AstmReference;

impl Chart for AstmReference {
    fn file_name(&self) -> &'static str {
        "astm-standards-reference.pdf"
    }

    fn title(&self) -> &'static str {
        "ASTM Standards Reference"
    }

    fn subject(&self) -> &'static str {
        "Metallography and hardness testing standards"
    }

    fn keywords(&self) -> &'static str {
        "ASTM, E3, E112, E407, E384, standards, metallography, hardness, grain size"
    }

    fn build(&self, builder: &mut DocumentBuilder) -> Result<(), ChartError> {
        builder.paragraph(
            "Titles are abbreviated to their current designation without the year suffix. Always \
             work to the edition called out in your purchase order or quality plan.",
        )?;

        let style = TableStyle::from_config(builder.config());
        TableRenderer::new(style)
            .render(builder, &ReferenceTable::new(&ASTM_COLUMNS, &ASTM_STANDARDS))?;

        builder.note(
            "Note",
            "Copies of the standards are available from ASTM International. This list is a \
             quick reference and does not replace the documents themselves.",
        )?;
        Ok(())
    }
}
