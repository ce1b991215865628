//! Final pass: one diagnostic per missing capability.

use super::registry::Registry;
use crate::analyzers::Pass;

pub fn missing_validate_message(name: &str) -> String {
    format!("struct {name} does not implement method 'Validate() error'")
}

pub fn missing_resource_mappings_message(name: &str) -> String {
    format!(
        "struct {name} does not implement method 'GetResourceMappings() []types.ResourceMapping'"
    )
}

/// Report every record still missing a capability, in declaration order.
///
/// Returns the number of diagnostics reported.
pub fn report_missing(pass: &mut Pass<'_>, registry: &Registry) -> usize {
    let mut reported = 0;

    for record in registry.sorted() {
        if !record.has_validate() {
            pass.report(
                record.position.clone(),
                missing_validate_message(&record.name),
            );
            reported += 1;
        }
        if !record.has_resource_mappings() {
            pass.report(
                record.position.clone(),
                missing_resource_mappings_message(&record.name),
            );
            reported += 1;
        }
    }

    reported
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::enforce_methods::registry::StructRecord;
    use crate::analyzers::go::TypesInfo;
    use crate::common::Position;
    use crate::core::Diagnostic;

    #[test]
    fn test_messages_carry_exact_signatures() {
        assert_eq!(
            missing_validate_message("A"),
            "struct A does not implement method 'Validate() error'"
        );
        assert_eq!(
            missing_resource_mappings_message("A"),
            "struct A does not implement method 'GetResourceMappings() []types.ResourceMapping'"
        );
    }

    #[test]
    fn test_one_diagnostic_per_missing_capability() {
        let mut registry = Registry::new();
        let mut complete = StructRecord::new("Complete", Position::new("a.go", 1, 6, 0));
        complete.mark_validate();
        complete.mark_resource_mappings();
        let mut half = StructRecord::new("Half", Position::new("a.go", 3, 6, 20));
        half.mark_validate();
        let bare = StructRecord::new("Bare", Position::new("a.go", 5, 6, 40));
        registry.insert(complete);
        registry.insert(half);
        registry.insert(bare);

        let types_info = TypesInfo::default();
        let mut sink: Vec<Diagnostic> = Vec::new();
        let reported = {
            let mut pass = Pass::new("enforceMethods", &[], &types_info, &mut sink);
            report_missing(&mut pass, &registry)
        };

        assert_eq!(reported, 3);
        let messages: Vec<_> = sink.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "struct Half does not implement method 'GetResourceMappings() []types.ResourceMapping'",
                "struct Bare does not implement method 'Validate() error'",
                "struct Bare does not implement method 'GetResourceMappings() []types.ResourceMapping'",
            ]
        );
        assert!(sink[1..].iter().all(|d| d.position.line == 5));
    }
}
