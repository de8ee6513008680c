//! Mock data standing in for the article backend
//!
//! The explore feed currently ships with this constant set; it reaches the
//! UI through the same provider contract a real backend client would use.

use super::article::Article;

/// The hard-coded explore feed: three entries with unique ids.
pub fn mock_articles() -> Vec<Article> {
    vec![
        Article::new(1, "人工智能在学术研究中的应用")
            .with_author("张教授")
            .with_date("2024-01-15")
            .with_summary("探讨AI技术如何改变传统学术研究模式，提高研究效率和质量。")
            .with_tags(vec!["AI".into(), "学术研究".into(), "技术".into()])
            .with_read_time("5分钟"),
        Article::new(2, "机器学习算法优化研究")
            .with_author("李博士")
            .with_date("2024-01-14")
            .with_summary("深入分析各种机器学习算法的性能优化方法，为实际应用提供指导。")
            .with_tags(vec!["机器学习".into(), "算法优化".into(), "研究".into()])
            .with_read_time("8分钟"),
        Article::new(3, "深度学习在自然语言处理中的突破")
            .with_author("王研究员")
            .with_date("2024-01-13")
            .with_summary("介绍最新的深度学习技术在NLP领域的重要进展和应用案例。")
            .with_tags(vec!["深度学习".into(), "NLP".into(), "技术突破".into()])
            .with_read_time("6分钟"),
    ]
}
