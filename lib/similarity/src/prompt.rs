//! Prompt rendering for the external explanation generator
//!
//! The engine itself never talks to a generative model; it only renders
//! the instruction prompt a surrounding service sends downstream, built
//! from the raw error message and the serialized ranked matches.

use crate::report::MatchRecord;

const PROMPT_TEMPLATE: &str = r#"# Error Analysis Prompt Template

You are an AI assistant specialized in analyzing error messages and providing detailed insights. Given an error message and its classification, you need to provide a comprehensive analysis in JSON format. Here's an example followed by a new query:

## Example:

Input Error Message: "10.251.35.1:50010:Got exception while serving blk_7940316270494947483 to /10.251.122.38:"

Model Output:
```
[{"level": "WARN", "component": "dfs.DataNode", "eventTemplate": "Got exception while serving blk_<*> to /<*>:", "type": "HDFS"}]
```

Expected Output:
{
  "analysis": {
    "coreIssue": "An exception occurred while the DataNode was serving a specific block to a client."
  },
  "classification": "HDFS",
  "severity": "WARN",
  "likelyCause": "There could be network issues, disk I/O problems, or the block might be corrupted. It's also possible that the client disconnected unexpectedly during data transfer.",
  "suggestedSolution": [
    "Check the DataNode logs for more detailed error messages",
    "Verify the health of the HDFS cluster",
    "Ensure that the block is not corrupted by running fsck",
    "Check network connectivity between the DataNode and the client"
  ],
  "tips": [
    "Regularly monitor DataNode health and performance",
    "Implement proper error handling and retry mechanisms in HDFS clients",
    "Keep HDFS software up-to-date to benefit from bug fixes and performance improvements"
  ],
  "actionableRecommendations": [
    "Run 'hdfs fsck' to check for any corrupted blocks",
    "Review DataNode logs for any recurring issues or patterns",
    "Monitor network performance between DataNodes and clients",
    "Consider increasing the number of replicas for important data to improve fault tolerance"
  ]
}

## New Query:

Input Error Message: "{error_message}"

Model Output:
{matches}

Based on the input error message and model output, provide a detailed analysis in the same JSON format as the example above. Include relevant information for all fields: analysis, classification, severity, likelyCause, suggestedSolution, tips, and actionableRecommendations. Do not include any markdown formatting or code blocks in your response, just the raw JSON object.
"#;

/// Render the analysis prompt for one classified error message.
///
/// `matches` should be the ranker's output in descending score order.
#[must_use]
pub fn analysis_prompt(error_message: &str, matches: &[MatchRecord]) -> String {
    let serialized =
        serde_json::to_string_pretty(matches).unwrap_or_else(|_| "[]".to_string());

    PROMPT_TEMPLATE
        .replace("{error_message}", error_message)
        .replace("{matches}", &serialized)
}
