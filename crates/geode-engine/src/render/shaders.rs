//! WGSL sources, embedded at build time.

pub(super) const OUTLINE_WGSL: &str = include_str!("shaders/outline.wgsl");
pub(super) const SOLID_WGSL: &str = include_str!("shaders/solid.wgsl");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{FlowerUniforms, SolidUniforms};

    fn parse_and_validate(source: &str) -> naga::Module {
        let module = naga::front::wgsl::parse_str(source).unwrap_or_else(|e| {
            panic!("WGSL parse error: {}", e.emit_to_string(source));
        });
        naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        )
        .validate(&module)
        .unwrap_or_else(|e| panic!("WGSL validation error: {e:?}"));
        module
    }

    fn uniform_struct_span(module: &naga::Module) -> u32 {
        module
            .types
            .iter()
            .find_map(|(_, ty)| match (&ty.name, &ty.inner) {
                (Some(name), naga::TypeInner::Struct { span, .. }) if name == "Uniforms" => Some(*span),
                _ => None,
            })
            .expect("shader declares a Uniforms struct")
    }

    fn has_entry_points(module: &naga::Module) -> bool {
        let names: Vec<&str> = module.entry_points.iter().map(|e| e.name.as_str()).collect();
        names.contains(&"vs_main") && names.contains(&"fs_main")
    }

    #[test]
    fn outline_shader_is_valid() {
        let module = parse_and_validate(OUTLINE_WGSL);
        assert!(has_entry_points(&module));
    }

    #[test]
    fn solid_shader_is_valid() {
        let module = parse_and_validate(SOLID_WGSL);
        assert!(has_entry_points(&module));
    }

    #[test]
    fn uniform_blocks_match_rust_layout() {
        let outline = parse_and_validate(OUTLINE_WGSL);
        assert_eq!(uniform_struct_span(&outline) as usize, std::mem::size_of::<FlowerUniforms>());

        let solid = parse_and_validate(SOLID_WGSL);
        assert_eq!(uniform_struct_span(&solid) as usize, std::mem::size_of::<SolidUniforms>());
    }
}
