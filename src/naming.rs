//! Naming conventions for the synthesized resources.
//!
//! All functions here are pure string composition.

/// Capitalizes the first character only: `processEvent` -> `ProcessEvent`.
///
/// This is not word-boundary casing. `process_event` becomes `Process_event`.
pub fn to_pascal_case(identifier: &str) -> String {
    let mut chars = identifier.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Default topic logical ID: `<rule>To<Func>Topic`.
pub fn derived_topic_name(rule_resource_name: &str, func_name: &str) -> String {
    format!("{rule_resource_name}To{func_name}Topic")
}

/// Physical name of a resource: the prefix followed by the base name.
pub fn qualified_name(prefix: &str, base_name: &str) -> String {
    format!("{prefix}{base_name}")
}

/// Default prefix for physical names: `<service>-<stage>-`.
pub fn default_prefix(service_name: &str, stage: &str) -> String {
    format!("{service_name}-{stage}-")
}

/// Logical ID of the per-event subscription: `SubscribeTo<topic>Topic`.
pub fn subscription_logical_id(topic_resource_name: &str) -> String {
    format!("SubscribeTo{topic_resource_name}Topic")
}

/// Logical ID of the per-event invoke permission: `<func>InvokeFrom<topic>`.
pub fn permission_logical_id(func_name: &str, topic_resource_name: &str) -> String {
    format!("{func_name}InvokeFrom{topic_resource_name}")
}

/// Logical ID the serverless framework gives the compiled lambda function.
pub fn lambda_function_logical_id(func_name: &str) -> String {
    format!("{func_name}LambdaFunction")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case_touches_only_the_first_character() {
        assert_eq!(to_pascal_case("processEvent"), "ProcessEvent");
        assert_eq!(to_pascal_case("process_event"), "Process_event");
        assert_eq!(to_pascal_case("Already"), "Already");
        assert_eq!(to_pascal_case("x"), "X");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn derived_names() {
        assert_eq!(
            derived_topic_name("OrderPlacedRule", "ProcessEvent"),
            "OrderPlacedRuleToProcessEventTopic"
        );
        assert_eq!(qualified_name("orders-dev-", "SNSDeadLetterQueue"), "orders-dev-SNSDeadLetterQueue");
        assert_eq!(default_prefix("orders", "prod"), "orders-prod-");
        assert_eq!(subscription_logical_id("MyTopic"), "SubscribeToMyTopicTopic");
        assert_eq!(permission_logical_id("ProcessEvent", "MyTopic"), "ProcessEventInvokeFromMyTopic");
        assert_eq!(lambda_function_logical_id("ProcessEvent"), "ProcessEventLambdaFunction");
    }
}
