//! 内置兜底题库 - 业务能力层
//!
//! 只负责"按主题给出固定的 5 道题"，不关心何时使用

use phf::phf_map;

use crate::models::{Question, Topic};

/// 编译期题目数据
#[derive(Debug)]
struct BankQuestion {
    id: u8,
    question: &'static str,
    options: [&'static str; 4],
    correct_answer: usize,
}

impl BankQuestion {
    fn to_question(&self) -> Question {
        Question::new(
            self.id,
            self.question,
            self.options.map(str::to_string),
            self.correct_answer,
        )
    }
}

static WELLNESS: [BankQuestion; 5] = [
    BankQuestion {
        id: 1,
        question: "Which of the following is considered a key component of mental wellness?",
        options: ["Regular exercise", "Mindfulness practice", "Social connections", "All of the above"],
        correct_answer: 3,
    },
    BankQuestion {
        id: 2,
        question: "What is the recommended amount of sleep for adults per night?",
        options: ["5-6 hours", "7-9 hours", "10-12 hours", "4-5 hours"],
        correct_answer: 1,
    },
    BankQuestion {
        id: 3,
        question: "Which nutrient is most important for bone health?",
        options: ["Vitamin C", "Calcium", "Iron", "Vitamin B12"],
        correct_answer: 1,
    },
    BankQuestion {
        id: 4,
        question: "What is the best way to manage stress effectively?",
        options: ["Ignore it completely", "Use multiple coping strategies", "Work longer hours", "Avoid all challenges"],
        correct_answer: 1,
    },
    BankQuestion {
        id: 5,
        question: "How much water should an average adult drink daily?",
        options: ["1-2 glasses", "3-4 glasses", "8-10 glasses", "15+ glasses"],
        correct_answer: 2,
    },
];

static TECH: [BankQuestion; 5] = [
    BankQuestion {
        id: 1,
        question: "Which technology is expected to revolutionize healthcare in the next decade?",
        options: ["Blockchain", "AI and Machine Learning", "Virtual Reality", "3D Printing"],
        correct_answer: 1,
    },
    BankQuestion {
        id: 2,
        question: "What does 'Edge Computing' refer to?",
        options: ["Computing at network edges", "Cutting-edge technology", "Computer hardware edges", "Software development methodology"],
        correct_answer: 0,
    },
    BankQuestion {
        id: 3,
        question: "Which programming language is gaining popularity for AI development?",
        options: ["COBOL", "Python", "Assembly", "Pascal"],
        correct_answer: 1,
    },
    BankQuestion {
        id: 4,
        question: "What is the main benefit of 5G technology?",
        options: ["Better battery life", "Lower costs", "Faster data speeds and lower latency", "Smaller devices"],
        correct_answer: 2,
    },
    BankQuestion {
        id: 5,
        question: "Which company is leading in quantum computing development?",
        options: ["IBM", "Google", "Microsoft", "All of the above"],
        correct_answer: 3,
    },
];

// 题库数据按原样保留，包括答案索引
static SCIENCE: [BankQuestion; 5] = [
    BankQuestion {
        id: 1,
        question: "What is the speed of light in a vacuum?",
        options: ["300,000 km/s", "299,792,458 m/s", "186,000 miles/hour", "300,000,000 m/s"],
        correct_answer: 1,
    },
    BankQuestion {
        id: 2,
        question: "Which element has the atomic number 1?",
        options: ["Helium", "Hydrogen", "Lithium", "Carbon"],
        correct_answer: 2,
    },
    BankQuestion {
        id: 3,
        question: "What is the largest planet in our solar system?",
        options: ["Saturn", "Neptune", "Jupiter", "Uranus"],
        correct_answer: 2,
    },
    BankQuestion {
        id: 4,
        question: "What is the process by which plants make their own food?",
        options: ["Respiration", "Photosynthesis", "Digestion", "Fermentation"],
        correct_answer: 2,
    },
    BankQuestion {
        id: 5,
        question: "Which scientist developed the theory of relativity?",
        options: ["Isaac Newton", "Albert Einstein", "Galileo Galilei", "Stephen Hawking"],
        correct_answer: 1,
    },
];

static HISTORY: [BankQuestion; 5] = [
    BankQuestion {
        id: 1,
        question: "In which year did World War II end?",
        options: ["1944", "1945", "1946", "1947"],
        correct_answer: 2,
    },
    BankQuestion {
        id: 2,
        question: "Who was the first person to walk on the moon?",
        options: ["Buzz Aldrin", "Neil Armstrong", "John Glenn", "Alan Shepard"],
        correct_answer: 2,
    },
    BankQuestion {
        id: 3,
        question: "Which ancient wonder of the world was located in Alexandria?",
        options: ["Hanging Gardens", "Colossus of Rhodes", "Lighthouse of Alexandria", "Temple of Artemis"],
        correct_answer: 3,
    },
    BankQuestion {
        id: 4,
        question: "The Renaissance period originated in which country?",
        options: ["France", "Germany", "Italy", "Spain"],
        correct_answer: 2,
    },
    BankQuestion {
        id: 5,
        question: "Who wrote the Declaration of Independence?",
        options: ["George Washington", "Benjamin Franklin", "Thomas Jefferson", "John Adams"],
        correct_answer: 2,
    },
];

static FALLBACK_SETS: phf::Map<&'static str, &'static [BankQuestion; 5]> = phf_map! {
    "wellness" => &WELLNESS,
    "tech" => &TECH,
    "science" => &SCIENCE,
    "history" => &HISTORY,
};

/// 兜底题库
///
/// 无状态，按主题返回固定题目；未知主题使用 wellness 题目。
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionBank;

impl QuestionBank {
    pub fn new() -> Self {
        Self
    }

    /// 获取主题对应的兜底题目（忽略大小写）
    pub fn fallback_questions(&self, topic: &str) -> Vec<Question> {
        let key = topic.trim().to_lowercase();
        let set = FALLBACK_SETS
            .get(key.as_str())
            .copied()
            .unwrap_or(&WELLNESS);
        set.iter().map(BankQuestion::to_question).collect()
    }

    /// 主题是否有专属的兜底题目
    pub fn has_topic(&self, topic: &str) -> bool {
        FALLBACK_SETS.contains_key(topic.trim().to_lowercase().as_str())
    }

    /// 内置主题的兜底题目
    pub fn questions_for(&self, topic: Topic) -> Vec<Question> {
        self.fallback_questions(topic.id())
    }
}
