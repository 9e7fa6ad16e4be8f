mod health;
mod normalize;

pub use health::{
    calculate_health_score, COGNITIVE_ISSUE_PENALTY, COMPLEXITY_PENALTY, DUPLICATE_STRING_PENALTY,
    DUPLICATION_POINT_PENALTY, GATE_FAILURE_CEILING, GOOD_AVERAGE_COMPLEXITY, LARGE_FILE_PENALTY,
    MAINTAINABILITY_ANCHOR, MAINTAINABILITY_POINT_PENALTY, OTHER_ISSUE_PENALTY,
};
pub use normalize::{
    normalize_ceiling, normalize_floor, normalize_scores, MetricName, EXCELLENT_COMPLEXITY,
};
