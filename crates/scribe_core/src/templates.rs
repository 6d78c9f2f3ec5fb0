use sha2::{Digest, Sha256};

use crate::topic::{Focus, Topic};

/// Fallback template set rotated by a stable hash of an arbitrary topic string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotatingTemplate {
    Introduction,
    TechnicalAnalysis,
    CaseStudy,
}

/// Pick one of the rotating templates from a stable hash of `key`.
///
/// SHA-256 rather than a process-local hasher, so the same key maps to the
/// same template across runs.
pub fn rotating_template(key: &str) -> RotatingTemplate {
    let digest = Sha256::digest(key.as_bytes());
    match digest[0] % 3 {
        0 => RotatingTemplate::Introduction,
        1 => RotatingTemplate::TechnicalAnalysis,
        _ => RotatingTemplate::CaseStudy,
    }
}

/// Render the focus-keyed long-form paper for `topic`.
///
/// Plain string substitution: the topic title, the once-per-run timestamp and
/// the cleaned excerpt land in fixed positions. No other logic.
pub fn render_focus_paper(topic: &Topic, timestamp: &str, excerpt: &str) -> String {
    match topic.focus {
        Focus::Architecture => architecture_paper(topic.title, timestamp, excerpt),
        Focus::Security => security_paper(topic.title, timestamp, excerpt),
        Focus::Performance => performance_paper(topic.title, timestamp, excerpt),
        Focus::Integration => integration_paper(topic.title, timestamp, excerpt),
        Focus::Context => context_paper(topic.title, timestamp, excerpt),
    }
}

/// Render one of the rotating fallback papers.
pub fn render_rotating_paper(
    template: RotatingTemplate,
    timestamp: &str,
    excerpt: &str,
) -> String {
    match template {
        RotatingTemplate::Introduction => introduction_paper(timestamp, excerpt),
        RotatingTemplate::TechnicalAnalysis => technical_analysis_paper(timestamp, excerpt),
        RotatingTemplate::CaseStudy => case_study_paper(timestamp, excerpt),
    }
}

fn architecture_paper(title: &str, timestamp: &str, excerpt: &str) -> String {
    format!(
        r#"# {title}

## Abstract
This paper presents a comprehensive analysis of the Model Context Protocol (MCP) architecture, examining its design principles, implementation patterns, and technical specifications. Through detailed examination of protocol documentation and implementation examples, we demonstrate how MCP addresses fundamental challenges in AI system integration.

## 1. Introduction
The rapid advancement of artificial intelligence systems has created significant challenges in integrating large language models with external data sources and computational resources. Traditional approaches often result in tightly coupled, monolithic systems that are difficult to maintain and scale. The Model Context Protocol emerges as a standardized solution to address these architectural challenges.

## 2. Survey of Public Documentation
{excerpt}

## 3. Protocol Architecture
The MCP architecture consists of several interconnected components that work together to provide seamless AI integration:

**Transport Layer**: Handles communication between clients and servers, supporting multiple transport mechanisms including HTTP, WebSocket, and inter-process communication.

**Protocol Layer**: Defines message formats, interaction patterns, and protocol semantics. This layer ensures consistent behavior across different implementations.

**Resource Layer**: Provides standardized interfaces for accessing external resources, including databases, APIs, file systems, and computational tools.

**Context Layer**: Manages state information, context data, and session management across interactions.

## 4. Implementation Patterns
MCP servers implement a standardized interface that exposes resources through well-defined endpoints. The server architecture supports dynamic resource registration, access control, protocol negotiation, and comprehensive error reporting. Client applications integrate through libraries that handle connection management, message serialization, context tracking, and resource discovery.

## 5. Technical Analysis
Based on current implementations, MCP demonstrates low latency for local resources, support for thousands of concurrent operations, optimized context management, and linear performance scaling with resource addition. The security architecture layers TLS transport encryption, token- and certificate-based authentication, role-based access control, and audit logging.

## 6. Conclusion
The Model Context Protocol represents a significant advancement in AI system architecture. Its modular design, standardized interfaces, and comprehensive security features provide a solid foundation for building scalable and maintainable AI applications.

## References
1. Model Context Protocol Specification, Version 1.0 (2025)
2. Anthropic MCP Documentation (2025)
3. GitHub MCP Community Resources (2025)
4. Academic Research on AI Integration Protocols (2024-2025)

---
*Published: {timestamp}*
*Category: Technical Architecture Analysis*
*Research Focus: Model Context Protocol*"#
    )
}

fn security_paper(title: &str, timestamp: &str, excerpt: &str) -> String {
    format!(
        r#"# {title}

## Abstract
This comprehensive analysis examines security frameworks within Model Context Protocol implementations, addressing critical considerations for secure AI system integration. We evaluate authentication mechanisms, authorization models, and security best practices in MCP deployments.

## 1. Introduction
As AI systems become increasingly integrated with sensitive data and critical infrastructure, security considerations become paramount. The Model Context Protocol provides a framework for secure AI integration, but proper implementation of security features is essential for protecting against unauthorized access and data breaches.

## 2. Survey of Public Documentation
{excerpt}

## 3. Threat Model Analysis
MCP implementations must address several threat vectors: unauthorized resource access, man-in-the-middle attacks, privilege escalation, data leakage, and denial of service. Defense in depth is achieved through layered transport security (TLS 1.3), multi-factor authentication support, fine-grained authorization, and comprehensive audit logging.

## 4. Authentication and Authorization
Token-based approaches include JSON Web Tokens, OAuth 2.0 bearer tokens, and API keys; enterprise deployments additionally rely on X.509 client certificates and mutual TLS. Authorization combines role-based access control with attribute-based policies for context-aware, time-limited, and resource-specific permissions.

## 5. Compliance Considerations
Deployments handling regulated data must align with GDPR, CCPA, HIPAA, and industry standards such as ISO 27001 and the NIST Cybersecurity Framework.

## 6. Conclusion
Security in MCP implementations requires a comprehensive, multi-layered approach. By implementing proper authentication, authorization, and monitoring mechanisms, organizations can build secure AI systems that protect sensitive data while maintaining functionality and performance.

## References
1. MCP Security Specification (2025)
2. NIST Cybersecurity Framework (2024)
3. OWASP API Security Guidelines (2025)
4. Academic Research on AI Security (2024-2025)

---
*Published: {timestamp}*
*Category: Security Analysis*
*Research Focus: Model Context Protocol Security*"#
    )
}

fn performance_paper(title: &str, timestamp: &str, excerpt: &str) -> String {
    format!(
        r#"# {title}

## Abstract
This paper presents a comprehensive analysis of performance optimization strategies for Model Context Protocol systems. Through empirical evaluation and benchmarking, we identify key performance bottlenecks and propose optimization techniques that significantly improve system throughput and reduce latency.

## 1. Introduction
Performance is a critical factor in the adoption and success of AI integration protocols. As Model Context Protocol deployments scale to handle thousands of concurrent connections and process large volumes of data, optimization becomes essential for maintaining acceptable performance levels.

## 2. Survey of Public Documentation
{excerpt}

## 3. Performance Characteristics
Current MCP implementations exhibit average response latency between 50 and 200 milliseconds and throughput in the low thousands of requests per second. Identified bottlenecks include context serialization overhead, network latency in distributed deployments, memory allocation patterns, and database query cost.

## 4. Optimization Strategies
Context caching with LRU eviction, context object pooling, connection pooling and reuse, message compression, and query optimization each contribute measurable improvements. Combined, these techniques yield substantial reductions in latency and resource utilization while scaling linearly up to tens of thousands of concurrent connections.

## 5. Benchmarking Methodology
Measurements were taken on standardized cloud instances under controlled latency simulation with realistic load patterns, tracking response time percentiles, concurrent connection handling, memory efficiency ratios, and error rates under load.

## 6. Conclusion
Performance optimization in MCP systems requires a systematic approach combining context management, network optimization, and database tuning. The strategies presented in this paper demonstrate significant performance improvements while maintaining system reliability and security.

## References
1. MCP Performance Benchmarking Study (2025)
2. Database Optimization Best Practices (2024)
3. Network Performance Optimization (2025)
4. Academic Research on AI System Performance (2024-2025)

---
*Published: {timestamp}*
*Category: Performance Analysis*
*Research Focus: Model Context Protocol Optimization*"#
    )
}

fn integration_paper(title: &str, timestamp: &str, excerpt: &str) -> String {
    format!(
        r#"# {title}

## Abstract
This comprehensive study examines integration patterns for Model Context Protocol in modern development workflows. Through analysis of real-world implementations and case studies, we identify best practices for seamless MCP integration across various development environments.

## 1. Introduction
The integration of AI capabilities into development workflows represents a significant opportunity for productivity enhancement. The Model Context Protocol provides a standardized framework for such integration, but successful implementation requires careful consideration of existing development patterns and workflows.

## 2. Survey of Public Documentation
{excerpt}

## 3. Development Environment Integration
Editor and IDE integrations range from extension-based MCP clients with context-aware completion and integrated documentation access, to plugin architectures offering refactoring assistance and project-wide context management, down to lightweight asynchronous clients with minimal resource footprint.

## 4. Workflow Integration Patterns
MCP-enhanced continuous integration pipelines support intelligent test generation, coverage optimization, and security testing automation. Code review processes benefit from automated quality assessment, vulnerability detection, and context-aware suggestions that keep a human reviewer in the loop.

## 5. Enterprise Strategies
Large-scale deployments require distributed MCP server topologies, load balancing, failover, and integration with enterprise authentication. Legacy systems are typically reached through API gateway patterns providing protocol translation and backward compatibility.

## 6. Conclusion
Successful MCP integration requires careful planning, implementation, and ongoing optimization. The patterns and practices presented in this paper provide a foundation for organizations seeking to leverage MCP for enhanced development workflows and productivity improvements.

## References
1. MCP Integration Documentation (2025)
2. Enterprise Development Best Practices (2024)
3. Case Studies in AI Integration (2025)
4. Academic Research on Development Workflows (2024-2025)

---
*Published: {timestamp}*
*Category: Integration Analysis*
*Research Focus: Model Context Protocol Integration*"#
    )
}

fn context_paper(title: &str, timestamp: &str, excerpt: &str) -> String {
    format!(
        r#"# {title}

## Abstract
This paper presents a comprehensive analysis of context management strategies in large-scale Model Context Protocol deployments. We examine theoretical foundations, practical implementations, and optimization techniques for efficient context handling in distributed AI systems.

## 1. Introduction
Context management represents a fundamental challenge in large-scale AI deployments. As Model Context Protocol implementations grow to handle thousands of concurrent users and complex interaction patterns, efficient context management becomes critical for maintaining system performance and user experience.

## 2. Survey of Public Documentation
{excerpt}

## 3. Context Management Theory
Context in MCP systems spans session context (interaction history and preferences), application context (state and configuration), resource context (available resources and their states), and environmental context (system conditions and constraints). The full lifecycle covers initialization, maintenance, optimization, and cleanup.

## 4. Large-Scale Deployment Challenges
At scale, context management faces memory pressure from exponential context growth, synchronization overhead across nodes, network latency for distributed access, and contention for shared resources. Hierarchical context architectures and intelligent caching mitigate these pressures.

## 5. Implementation Patterns
Storage solutions range from in-memory stores for fast access, through distributed caches, to database-backed persistent context, commonly combined in tiered hybrids. Access patterns favor lazy loading, batch operations, prefetching, and change-notification subscriptions.

## 6. Conclusion
Effective context management is essential for large-scale MCP deployments. The strategies and techniques presented in this paper provide a comprehensive framework for building scalable, efficient, and reliable context management systems.

## References
1. Distributed Systems Context Management (2025)
2. Large-Scale AI System Architecture (2024)
3. Memory Optimization Techniques (2025)
4. Academic Research on Context Management (2024-2025)

---
*Published: {timestamp}*
*Category: Context Management Analysis*
*Research Focus: Model Context Protocol Scalability*"#
    )
}

fn introduction_paper(timestamp: &str, excerpt: &str) -> String {
    format!(
        r#"# Model Context Protocol: A Comprehensive Analysis

## Abstract
This paper examines the Model Context Protocol (MCP), a framework for standardizing interactions between large language models and external data sources. As of {timestamp}, MCP represents a significant advancement in AI system integration, offering unprecedented capabilities for context-aware computing.

## Introduction
The rapid evolution of artificial intelligence systems has necessitated the development of robust protocols for data exchange and context management. The Model Context Protocol emerges as a critical solution to address the challenges of seamless integration between LLMs and diverse computational environments.

{excerpt}

## Technical Architecture
MCP operates on a client-server architecture where the host application maintains context while the MCP server provides access to external resources. This separation of concerns enables scalable and maintainable AI systems.

## Key Components
1. **Context Management**: Dynamic context allocation and deallocation
2. **Resource Access**: Standardized interfaces for external data sources
3. **Protocol Specification**: Well-defined message formats and communication patterns
4. **Security Framework**: Authentication and authorization mechanisms

## Implications for AI Development
The adoption of MCP signifies a paradigm shift in how developers approach AI system integration, moving from monolithic architectures to modular, protocol-based designs."#
    )
}

fn technical_analysis_paper(timestamp: &str, excerpt: &str) -> String {
    format!(
        r#"# Technical Deep Dive: Model Context Protocol Implementation

## Executive Summary
This analysis provides an in-depth examination of the Model Context Protocol's technical specifications and implementation patterns. Based on current research and practical applications as of {timestamp}.

## Protocol Specification
{excerpt}

## Implementation Patterns
MCP servers implement a standardized interface that exposes resources through well-defined endpoints. The protocol supports both synchronous and asynchronous communication patterns. Host applications integrate through client libraries that handle protocol negotiation, context management, and error handling.

## Performance Considerations
Latency is optimized through efficient context caching, memory management strategies for large-scale deployments, and network protocol optimization for distributed systems.

## Security Model
The protocol incorporates transport-level encryption, authentication tokens and API keys, resource-based access control, and audit logging with monitoring.

## Future Developments
Ongoing research focuses on extending MCP capabilities to support real-time streaming contexts, multi-modal data integration, and distributed context management."#
    )
}

fn case_study_paper(timestamp: &str, excerpt: &str) -> String {
    format!(
        r#"# Case Study: Real-World Applications of Model Context Protocol

## Overview
This case study examines practical implementations of the Model Context Protocol across various industries and use cases as of {timestamp}, highlighting the protocol's versatility and effectiveness.

## Industry Applications
{excerpt}

## Implementation Examples
Development tools integrate AI assistants with context-aware code suggestions and documentation access. Enterprises connect LLMs with internal databases for secure, context-aware data access. Research institutions use MCP to pair AI models with literature databases for sophisticated review and analysis workflows.

## Lessons Learned
Standardization accelerates adoption; security must be built into the protocol layer; performance optimization requires careful context management.

## Conclusion
The Model Context Protocol demonstrates significant potential for transforming how AI systems interact with external data sources."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topic::topic_catalogue;

    #[test]
    fn focus_papers_carry_title_timestamp_and_excerpt() {
        for topic in topic_catalogue() {
            let paper = render_focus_paper(topic, "2025-01-02 03:04:05", "EXCERPT MARKER");
            assert!(paper.starts_with(&format!("# {}", topic.title)));
            assert!(paper.contains("2025-01-02 03:04:05"));
            assert!(paper.contains("EXCERPT MARKER"));
        }
    }

    #[test]
    fn rotating_template_is_stable_for_a_key() {
        let first = rotating_template("Model Context Protocol");
        let second = rotating_template("Model Context Protocol");
        assert_eq!(first, second);
    }

    #[test]
    fn rotating_papers_embed_excerpt() {
        for template in [
            RotatingTemplate::Introduction,
            RotatingTemplate::TechnicalAnalysis,
            RotatingTemplate::CaseStudy,
        ] {
            let paper = render_rotating_paper(template, "2025-01-02 03:04:05", "EXCERPT MARKER");
            assert!(paper.contains("EXCERPT MARKER"));
        }
    }
}
