//! Session Context - 口令门
//!
//! 监听整个页面的按键序列：维护长度不超过口令长度的尾部缓冲，
//! 缓冲内容与口令完全相等时解锁并清空缓冲。解锁无超时，
//! 上锁为手动操作（同样清空缓冲）。
//!
//! 不变量:
//! - 缓冲长度 <= 口令长度
//! - 这只是隐藏编辑入口的小把戏，不是访问控制机制

use std::collections::VecDeque;

/// 口令门
#[derive(Debug, Clone)]
pub struct PasswordGate {
    password: Vec<char>,
    buffer: VecDeque<char>,
    unlocked: bool,
}

impl PasswordGate {
    /// 创建口令门（口令不可为空，配置层已校验）
    pub fn new(password: impl AsRef<str>) -> Self {
        Self {
            password: password.as_ref().chars().collect(),
            buffer: VecDeque::new(),
            unlocked: false,
        }
    }

    /// 处理一次按键，返回当前是否已解锁
    pub fn key_pressed(&mut self, key: char) -> bool {
        self.buffer.push_back(key);
        while self.buffer.len() > self.password.len() {
            self.buffer.pop_front();
        }

        if !self.unlocked && self.buffer.len() == self.password.len() {
            let matched = self.buffer.iter().zip(self.password.iter()).all(|(a, b)| a == b);
            if matched {
                self.unlocked = true;
                self.buffer.clear();
            }
        }

        self.unlocked
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// 手动上锁，同时清空缓冲
    pub fn lock(&mut self) {
        self.unlocked = false;
        self.buffer.clear();
    }
}
