// Pattern: Composite
// Files and directories share one interface; a directory's size is the sum
// of everything beneath it. The tree owns its children, so there are no
// parent back-references to keep in sync.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    name: String,
    size: u64,
}

impl File {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    name: String,
    children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    File(File),
    Directory(Directory),
}

impl From<File> for Node {
    fn from(file: File) -> Self {
        Node::File(file)
    }
}

impl From<Directory> for Node {
    fn from(directory: Directory) -> Self {
        Node::Directory(directory)
    }
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::File(file) => &file.name,
            Node::Directory(dir) => &dir.name,
        }
    }

    pub fn size(&self) -> u64 {
        match self {
            Node::File(file) => file.size,
            Node::Directory(dir) => dir.size(),
        }
    }

    fn ls_into(&self, depth: usize, out: &mut Vec<String>) {
        match self {
            Node::File(file) => {
                let indent = "  ".repeat(depth);
                out.push(format!("{indent}File: {}, Size: {} bytes", file.name, file.size));
            }
            Node::Directory(dir) => dir.ls_into(depth, out),
        }
    }
}

impl Directory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn add(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Removes the first direct child with this name, if any.
    pub fn remove(&mut self, name: &str) -> Option<Node> {
        let index = self.children.iter().position(|child| child.name() == name)?;
        Some(self.children.remove(index))
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn size(&self) -> u64 {
        self.children.iter().map(Node::size).sum()
    }

    /// Depth-first listing, children indented under their directory.
    pub fn ls(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.ls_into(0, &mut out);
        out
    }

    fn ls_into(&self, depth: usize, out: &mut Vec<String>) {
        let indent = "  ".repeat(depth);
        out.push(format!("{indent}Directory: {}, Size: {} bytes", self.name, self.size()));
        for child in &self.children {
            child.ls_into(depth + 1, out);
        }
    }
}

pub fn run_demo() {
    let mut documents = Directory::new("Documents");
    documents.add(File::new("Document1.txt", 100));

    let mut pictures = Directory::new("Pictures");
    pictures.add(File::new("Picture1.jpg", 200));
    pictures.add(File::new("Picture2.jpg", 300));

    let mut root = Directory::new("Root");
    root.add(documents);
    root.add(pictures);

    for line in root.ls() {
        println!("{line}");
    }
}
