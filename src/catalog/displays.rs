use super::gate;
use crate::error::Result;
use crate::ir::{DrawStyle, GateBuilder, GateDescriptor, GateFamily, MatrixSource};
use crate::math::identity;

pub fn bloch_sphere() -> Result<GateDescriptor> {
    gate(
        "Bloch",
        MatrixSource::fixed(identity(2)),
        "Bloch Sphere Display",
        "Shows a wire's local state as a point on the Bloch sphere.",
        "Use controls to see conditional states.",
        DrawStyle::Display,
    )
}

fn display_family(
    base_id: &'static str,
    name: &'static str,
    short_doc: &'static str,
    long_doc: &'static str,
) -> GateFamily {
    GateFamily::new(base_id, move |n| {
        GateBuilder::new(base_id, MatrixSource::fixed(identity(1 << n)))
            .name(name)
            .short_doc(short_doc)
            .long_doc(long_doc)
            .drawer(DrawStyle::Display)
    })
}

pub fn probability_family() -> GateFamily {
    display_family(
        "Chance",
        "Probability Display",
        "Shows chances of outcomes if a measurement was performed.",
        "Use controls to see conditional probabilities.",
    )
}

pub fn amplitude_family() -> GateFamily {
    display_family(
        "Amps",
        "Amplitude Display",
        "Shows the amplitudes of some wires, if separable from the others.",
        "Use controls to see conditional amplitudes.",
    )
}

pub fn sample_family() -> GateFamily {
    display_family(
        "Sample",
        "Sampled Results Display",
        "Shows a random sample of possible measurement outcomes.",
        "Use controls to see conditional samples.",
    )
}

pub fn density_family() -> GateFamily {
    display_family(
        "Density",
        "Density Matrix Display",
        "Shows the density matrix of the local mixed state of some wires.",
        "Use controls to see conditional states.",
    )
}

pub fn singles() -> Result<Vec<GateDescriptor>> {
    Ok(vec![bloch_sphere()?])
}

pub fn families() -> Vec<GateFamily> {
    vec![
        amplitude_family(),
        probability_family(),
        sample_family(),
        density_family(),
    ]
}
